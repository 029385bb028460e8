//! Deterministic decision logic for a multi-phase boss encounter.
//!
//! `encounter-core` owns the boss's health, phase, cooldowns and suspended
//! work, and decides each frame what the boss does. It never reads a clock
//! or draws ambient randomness: the caller passes [`GameTime`] into every
//! call, rolls come from an injected [`RandomSource`], and the world is
//! reached through the oracle traits in [`env`]. All state mutation flows
//! through [`BossController`].
mod actions;
pub mod animation;
pub mod arbiter;
pub mod config;
pub mod controller;
pub mod defense;
pub mod env;
pub mod error;
pub mod events;
pub mod math;
pub mod movement;
pub mod phase;
pub mod rng;
pub mod scheduler;
pub mod state;
pub mod time;
pub mod timers;
pub mod tint;

#[cfg(test)]
pub(crate) mod testing;

pub use animation::{Clip, ClipSet};
pub use arbiter::{ActionArbiter, ArbiterState, Blackboard, Decision, PRIORITY};
pub use config::{
    BossConfig, ConfigError, DeathConfig, DodgeConfig, HealingConfig, MeleeConfig, MovementConfig,
    PhaseTuning, PulseConfig, ReflectionConfig, ShockwaveConfig, StatsConfig, TeleportConfig,
};
pub use controller::BossController;
pub use defense::DefenseOutcome;
pub use env::{
    AnimationOracle, EffectKind, EffectsOracle, EncounterEnv, NavigationOracle, OracleError,
    ProgressionOracle, TargetOracle,
};
pub use error::{ActionError, EncounterError, ErrorSeverity};
pub use events::{EncounterEvent, EventRecord, TeleportKind};
pub use math::Vec3;
pub use movement::MovementPattern;
pub use phase::{Phase, PhaseFlags, PhaseProfile, SpeedProfile};
pub use rng::{Pcg32, RandomSource, ScriptedRandom};
pub use scheduler::{Continuation, Scheduler, TaskId};
pub use state::BossState;
pub use time::GameTime;
pub use timers::{Cooldown, CooldownTimers};
pub use tint::{Color, TintChannel, TintPulse};
