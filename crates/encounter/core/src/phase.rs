//! Phase policy.
//!
//! A boss advances through [`Phase::One`], [`Phase::Two`] and
//! [`Phase::Three`] as its health drops below the configured thresholds.
//! Phases never regress. Each transition is guarded by a one-shot
//! [`PhaseFlags`] bit so its multipliers apply exactly once.
//!
//! All derived values are recomputed from the phase-1 base stats, so
//! multipliers never compound across transitions.

use bitflags::bitflags;
use strum::{EnumIter, IntoStaticStr};

use crate::config::{BossConfig, StatsConfig};
use crate::tint::Color;

/// Difficulty tier of the boss.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    IntoStaticStr,
    strum::Display,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Phase {
    #[default]
    #[strum(serialize = "phase 1")]
    One,
    #[strum(serialize = "phase 2")]
    Two,
    #[strum(serialize = "phase 3")]
    Three,
}

impl Phase {
    pub const fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    /// One-shot flag guarding entry into this phase.
    pub const fn entry_flag(self) -> PhaseFlags {
        match self {
            Self::One => PhaseFlags::empty(),
            Self::Two => PhaseFlags::ENTERED_PHASE_2,
            Self::Three => PhaseFlags::ENTERED_PHASE_3,
        }
    }
}

bitflags! {
    /// Phase transitions that have already run.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct PhaseFlags: u8 {
        const ENTERED_PHASE_2 = 1 << 0;
        const ENTERED_PHASE_3 = 1 << 1;
    }
}

/// Locomotion speeds for the current phase.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeedProfile {
    pub walk: f32,
    pub run: f32,
    pub strafe: f32,
}

impl SpeedProfile {
    pub fn base(stats: &StatsConfig) -> Self {
        Self {
            walk: stats.walk_speed,
            run: stats.run_speed,
            strafe: stats.strafe_speed,
        }
    }

    pub fn scaled(stats: &StatsConfig, multiplier: f32) -> Self {
        let base = Self::base(stats);
        Self {
            walk: base.walk * multiplier,
            run: base.run * multiplier,
            strafe: base.strafe * multiplier,
        }
    }
}

/// Everything the phase decides about combat numbers.
#[derive(Clone, Debug, PartialEq)]
pub struct PhaseProfile {
    pub phase: Phase,
    pub damage: f32,
    pub speed_multiplier: f32,
    pub speeds: SpeedProfile,
    pub dodge_chance: f32,
    pub attack_cooldown: f32,
    pub teleport_cooldown: f32,
    pub emergency_teleport_chance: f32,
    pub tint: Option<Color>,
}

impl PhaseProfile {
    pub fn for_phase(phase: Phase, config: &BossConfig) -> Self {
        let tuning = config.tuning(phase);
        Self {
            phase,
            damage: config.stats.base_damage * tuning.damage_multiplier,
            speed_multiplier: tuning.speed_multiplier,
            speeds: SpeedProfile::scaled(&config.stats, tuning.speed_multiplier),
            dodge_chance: tuning.dodge_chance,
            attack_cooldown: config.melee.cooldown * tuning.attack_cooldown_scale,
            teleport_cooldown: config.teleport.cooldown * tuning.teleport_cooldown_scale,
            emergency_teleport_chance: tuning.emergency_teleport_chance,
            tint: tuning.tint,
        }
    }
}

/// Returns the transition that should run now, if any.
///
/// Phase 2 is checked before phase 3 and at most one transition is
/// reported per call: when a single hit crosses both thresholds, phase 2
/// runs now and phase 3 on the next evaluation.
pub fn pending_transition(health: f32, flags: PhaseFlags, config: &BossConfig) -> Option<Phase> {
    if !flags.contains(PhaseFlags::ENTERED_PHASE_2) && health <= config.phase2.health_threshold {
        Some(Phase::Two)
    } else if config.phase3_enabled()
        && !flags.contains(PhaseFlags::ENTERED_PHASE_3)
        && health <= config.phase3.health_threshold
    {
        Some(Phase::Three)
    } else {
        None
    }
}

pub fn teleport_unlocked(phase: Phase, config: &BossConfig) -> bool {
    config.teleport.enabled && phase >= Phase::Two
}

pub fn healing_unlocked(phase: Phase, config: &BossConfig) -> bool {
    config.healing.enabled && phase >= Phase::Three
}

pub fn reflection_unlocked(phase: Phase, config: &BossConfig) -> bool {
    config.reflection.enabled && phase >= config.reflection.unlock_phase
}
