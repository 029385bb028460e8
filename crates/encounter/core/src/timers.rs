//! Independent next-allowed-time cooldowns.
//!
//! Each [`Cooldown`] stores the earliest [`GameTime`] at which its action may
//! fire again. Consuming one cooldown never touches another.

use strum::{EnumCount, EnumIter, IntoStaticStr};

use crate::time::GameTime;

/// Identifies one cooldown timer.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, EnumCount, EnumIter, IntoStaticStr, strum::Display,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Cooldown {
    Attack,
    Teleport,
    Shockwave,
    Heal,
    Dodge,
    PatternChange,
}

impl Cooldown {
    const fn slot(self) -> usize {
        self as usize
    }
}

/// The full set of cooldowns owned by one boss.
#[derive(Clone, Debug, PartialEq)]
pub struct CooldownTimers {
    next_allowed: [GameTime; Cooldown::COUNT],
}

impl CooldownTimers {
    /// All timers start ready.
    pub fn new() -> Self {
        Self {
            next_allowed: [GameTime::ZERO; Cooldown::COUNT],
        }
    }

    pub fn is_ready(&self, cooldown: Cooldown, now: GameTime) -> bool {
        now >= self.next_allowed[cooldown.slot()]
    }

    /// Fires the cooldown: the action becomes legal again at `now + duration`.
    pub fn consume(&mut self, cooldown: Cooldown, now: GameTime, duration: f32) {
        self.next_allowed[cooldown.slot()] = now + duration.max(0.0);
    }

    /// Pushes the next-allowed time to `at` without consuming.
    pub fn delay_until(&mut self, cooldown: Cooldown, at: GameTime) {
        self.next_allowed[cooldown.slot()] = at;
    }

    /// Clears the cooldown so the next readiness check passes.
    ///
    /// The following [`consume`](Self::consume) pushes it forward again,
    /// so a reset bypasses the cooldown exactly once.
    pub fn force_reset(&mut self, cooldown: Cooldown) {
        self.next_allowed[cooldown.slot()] = GameTime::ZERO;
    }

    pub fn next_allowed(&self, cooldown: Cooldown) -> GameTime {
        self.next_allowed[cooldown.slot()]
    }

    /// Seconds until the cooldown is ready, zero when already ready.
    pub fn remaining(&self, cooldown: Cooldown, now: GameTime) -> f32 {
        self.next_allowed[cooldown.slot()].since(now)
    }
}

impl Default for CooldownTimers {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn fresh_timers_are_ready() {
        let timers = CooldownTimers::new();
        for cooldown in Cooldown::iter() {
            assert!(timers.is_ready(cooldown, GameTime::ZERO));
        }
    }

    #[test]
    fn consume_pushes_only_that_timer() {
        let mut timers = CooldownTimers::new();
        timers.consume(Cooldown::Teleport, GameTime(2.0), 10.0);

        assert!(!timers.is_ready(Cooldown::Teleport, GameTime(11.9)));
        assert!(timers.is_ready(Cooldown::Teleport, GameTime(12.0)));
        assert!(timers.is_ready(Cooldown::Attack, GameTime(2.0)));
        assert_eq!(timers.remaining(Cooldown::Teleport, GameTime(7.0)), 5.0);
    }

    #[test]
    fn force_reset_bypasses_once() {
        let mut timers = CooldownTimers::new();
        timers.consume(Cooldown::Teleport, GameTime(1.0), 10.0);
        timers.force_reset(Cooldown::Teleport);
        assert!(timers.is_ready(Cooldown::Teleport, GameTime(1.5)));

        timers.consume(Cooldown::Teleport, GameTime(1.5), 10.0);
        assert!(!timers.is_ready(Cooldown::Teleport, GameTime(2.0)));
    }

    #[test]
    fn cooldown_names_are_snake_case() {
        assert_eq!(Cooldown::PatternChange.to_string(), "pattern_change");
    }
}
