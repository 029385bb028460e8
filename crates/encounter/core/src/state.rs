use crate::arbiter::ArbiterState;
use crate::config::BossConfig;
use crate::math::Vec3;
use crate::movement::MovementPattern;
use crate::phase::{Phase, PhaseFlags, PhaseProfile};
use crate::timers::CooldownTimers;

/// Everything the controller knows about its boss.
///
/// Only [`BossController`](crate::BossController) writes to it.
#[derive(Clone, Debug)]
pub struct BossState {
    pub health: f32,
    pub max_health: f32,
    pub phase: Phase,
    pub flags: PhaseFlags,
    /// Numbers derived from `phase`, recomputed on every transition.
    pub profile: PhaseProfile,
    pub pattern: MovementPattern,
    /// Fixed destination of the current pattern, if it has one.
    pub destination: Option<Vec3>,
    pub cooldowns: CooldownTimers,
    pub activity: ArbiterState,
    pub position: Vec3,
    pub is_dead: bool,
    pub despawned: bool,
}

impl BossState {
    /// Full health, phase 1.
    pub fn new(config: &BossConfig) -> Self {
        Self {
            health: config.stats.max_health,
            max_health: config.stats.max_health,
            phase: Phase::One,
            flags: PhaseFlags::empty(),
            profile: PhaseProfile::for_phase(Phase::One, config),
            pattern: MovementPattern::Approach,
            destination: None,
            cooldowns: CooldownTimers::new(),
            activity: ArbiterState::Idle,
            position: Vec3::ZERO,
            is_dead: false,
            despawned: false,
        }
    }

    /// Subtracts `amount` and clamps to `[0, max_health]`.
    pub fn apply_damage(&mut self, amount: f32) -> f32 {
        self.health = (self.health - amount).clamp(0.0, self.max_health);
        self.health
    }

    /// Restores up to `amount`; returns what was actually healed.
    pub fn heal(&mut self, amount: f32) -> f32 {
        let before = self.health;
        self.health = (self.health + amount).min(self.max_health);
        self.health - before
    }

    /// Runs the one-shot part of a transition.
    ///
    /// Returns `false` when the transition already ran or would move the
    /// phase backwards; nothing changes in that case.
    pub fn enter_phase(&mut self, phase: Phase, config: &BossConfig) -> bool {
        let flag = phase.entry_flag();
        if flag.is_empty() || self.flags.contains(flag) || phase < self.phase {
            return false;
        }
        self.flags.insert(flag);
        self.phase = phase;
        self.profile = PhaseProfile::for_phase(phase, config);
        true
    }

    pub fn is_wounded(&self) -> bool {
        self.health < self.max_health
    }
}
