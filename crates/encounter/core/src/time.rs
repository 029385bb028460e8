use std::fmt;
use std::ops::{Add, Sub};

/// Encounter clock in seconds, supplied by the caller on every tick.
///
/// The core never samples a wall clock; the frame scheduler owns time.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameTime(pub f32);

impl GameTime {
    pub const ZERO: Self = Self(0.0);

    pub const fn from_secs(secs: f32) -> Self {
        Self(secs)
    }

    pub const fn as_secs(self) -> f32 {
        self.0
    }

    /// Seconds elapsed since `earlier`, never negative.
    pub fn since(self, earlier: GameTime) -> f32 {
        (self.0 - earlier.0).max(0.0)
    }
}

impl Add<f32> for GameTime {
    type Output = GameTime;
    fn add(self, rhs: f32) -> GameTime {
        GameTime(self.0 + rhs)
    }
}

impl Sub<GameTime> for GameTime {
    type Output = f32;
    fn sub(self, rhs: GameTime) -> f32 {
        self.0 - rhs.0
    }
}

impl fmt::Display for GameTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}s", self.0)
    }
}
