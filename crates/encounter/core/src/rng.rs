//! Injectable random source for encounter rolls.
//!
//! Every probabilistic decision (dodge, reflect, teleport kind, ring point,
//! movement pattern, clip choice) draws from a [`RandomSource`] owned by the
//! controller, so a run is reproducible from its seed.
//!
//! # Determinism
//!
//! Given the same seed and the same sequence of calls, [`Pcg32`] yields the
//! same values on every platform.

use std::collections::VecDeque;

/// Source of uniform random numbers.
pub trait RandomSource: Send {
    /// Uniform value in `[0, 1)`.
    fn unit(&mut self) -> f32;

    /// `true` with probability `chance` (clamped to `[0, 1]`).
    fn roll(&mut self, chance: f32) -> bool {
        self.unit() < chance.clamp(0.0, 1.0)
    }

    /// Fair coin flip.
    fn coin(&mut self) -> bool {
        self.unit() < 0.5
    }

    /// Uniform value in `[min, max)`. Returns `min` for an empty range.
    fn range(&mut self, min: f32, max: f32) -> f32 {
        if max <= min {
            return min;
        }
        min + (max - min) * self.unit()
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "pick_index on an empty set");
        ((self.unit() * len as f32) as usize).min(len.saturating_sub(1))
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn unit(&mut self) -> f32 {
        (**self).unit()
    }
}

/// Stateful PCG-XSH-RR generator (64-bit state, 32-bit output).
#[derive(Clone, Debug)]
pub struct Pcg32 {
    state: u64,
}

impl Pcg32 {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a generator from an encounter seed and a stream id.
    ///
    /// Different streams from the same seed are decorrelated, which lets
    /// several bosses share one encounter seed.
    pub fn new(seed: u64, stream: u32) -> Self {
        let mut rng = Self {
            state: mix_seed(seed, stream),
        };
        rng.next_u32();
        rng
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(seed, 0)
    }

    pub fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.state = old
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);

        let xorshifted = (((old >> 18) ^ old) >> 27) as u32;
        let rot = (old >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RandomSource for Pcg32 {
    fn unit(&mut self) -> f32 {
        // 24 high bits fill the f32 mantissa exactly.
        (self.next_u32() >> 8) as f32 * (1.0 / (1u32 << 24) as f32)
    }
}

/// SplitMix64-style avalanche of seed and stream id.
fn mix_seed(seed: u64, stream: u32) -> u64 {
    let mut hash = seed ^ (stream as u64).wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xc4ceb9fe1a85ec53);
    hash ^= hash >> 33;
    hash
}

/// Replays a fixed list of unit values, then repeats `fallback`.
///
/// Used to script exact roll outcomes in tests and to replay a recorded
/// encounter.
#[derive(Clone, Debug)]
pub struct ScriptedRandom {
    values: VecDeque<f32>,
    fallback: f32,
}

impl ScriptedRandom {
    pub fn new(values: impl IntoIterator<Item = f32>) -> Self {
        Self {
            values: values.into_iter().collect(),
            fallback: 0.999,
        }
    }

    /// Always returns `value`.
    pub fn constant(value: f32) -> Self {
        Self {
            values: VecDeque::new(),
            fallback: value,
        }
    }

    pub fn with_fallback(mut self, fallback: f32) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn push(&mut self, value: f32) {
        self.values.push_back(value);
    }

    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn unit(&mut self) -> f32 {
        self.values
            .pop_front()
            .unwrap_or(self.fallback)
            .clamp(0.0, 0.999_999)
    }
}
