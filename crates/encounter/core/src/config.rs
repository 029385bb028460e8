//! Encounter tunables.
//!
//! Every value has a documented default so a boss can be spawned with
//! `BossConfig::default()`. Content files only need to override what they
//! change: every section may be omitted, and fields inside the non-phase
//! sections fall back to their defaults individually.

use crate::phase::Phase;
use crate::tint::Color;

/// Configuration validation failure.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be positive (got {value})")]
    NonPositive { field: &'static str, value: f32 },

    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f32 },

    #[error("{field} must be a probability in [0, 1] (got {value})")]
    ChanceOutOfRange { field: &'static str, value: f32 },

    #[error("{field}: minimum {min} exceeds maximum {max}")]
    InvertedRange {
        field: &'static str,
        min: f32,
        max: f32,
    },

    #[error("phase 3 threshold {phase3} must be below phase 2 threshold {phase2}")]
    ThresholdOrder { phase2: f32, phase3: f32 },

    #[error("phase 2 threshold {threshold} exceeds max health {max_health}")]
    ThresholdAboveMax { threshold: f32, max_health: f32 },

    #[error("{phase}: {source}")]
    InPhase {
        phase: &'static str,
        #[source]
        source: Box<ConfigError>,
    },

    #[error("attack range {attack} must not exceed chase range {chase}")]
    RangeOrder { attack: f32, chase: f32 },
}

/// Base combat stats (phase 1 values).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct StatsConfig {
    pub max_health: f32,
    pub attack_range: f32,
    pub chase_range: f32,
    pub base_damage: f32,
    pub walk_speed: f32,
    pub run_speed: f32,
    pub strafe_speed: f32,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            max_health: 1000.0,
            attack_range: 4.0,
            chase_range: 30.0,
            base_damage: 25.0,
            walk_speed: 2.0,
            run_speed: 4.0,
            strafe_speed: 3.0,
        }
    }
}

/// Movement pattern selection while chasing.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct MovementConfig {
    /// When false the boss always approaches directly.
    pub use_dynamic_movement: bool,
    /// Seconds between pattern re-rolls.
    pub pattern_interval: f32,
    pub strafe_chance: f32,
    /// Extra probability band above `strafe_chance` that selects Backpedal
    /// (phase 2 onwards).
    pub backpedal_margin: f32,
    pub strafe_distance: f32,
    pub backpedal_distance: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            use_dynamic_movement: true,
            pattern_interval: 2.0,
            strafe_chance: 0.3,
            backpedal_margin: 0.1,
            strafe_distance: 5.0,
            backpedal_distance: 5.0,
        }
    }
}

/// Per-phase tuning. Multipliers are relative to the phase-1 base stats.
///
/// A phase section in a content file must list every field except `tint`;
/// omitted sections fall back to the built-in preset for that phase.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhaseTuning {
    /// Health at or below which the phase starts. Ignored for phase 1;
    /// `0` disables phase 3.
    pub health_threshold: f32,
    pub damage_multiplier: f32,
    pub speed_multiplier: f32,
    pub dodge_chance: f32,
    pub attack_cooldown_scale: f32,
    pub teleport_cooldown_scale: f32,
    /// Chance that a non-lethal hit triggers an out-of-cycle teleport.
    pub emergency_teleport_chance: f32,
    /// Tint pulsed while in this phase (`None` keeps the base color).
    #[cfg_attr(feature = "serde", serde(default))]
    pub tint: Option<Color>,
}

impl PhaseTuning {
    pub fn phase_one() -> Self {
        Self {
            health_threshold: f32::INFINITY,
            damage_multiplier: 1.0,
            speed_multiplier: 1.0,
            dodge_chance: 0.3,
            attack_cooldown_scale: 1.0,
            teleport_cooldown_scale: 1.0,
            emergency_teleport_chance: 0.0,
            tint: None,
        }
    }

    pub fn phase_two() -> Self {
        Self {
            health_threshold: 500.0,
            damage_multiplier: 2.0,
            speed_multiplier: 1.5,
            dodge_chance: 0.4,
            attack_cooldown_scale: 0.7,
            teleport_cooldown_scale: 1.0,
            emergency_teleport_chance: 0.3,
            tint: Some(Color::RED),
        }
    }

    pub fn phase_three() -> Self {
        Self {
            health_threshold: 250.0,
            damage_multiplier: 2.5,
            speed_multiplier: 1.7,
            dodge_chance: 0.5,
            attack_cooldown_scale: 0.5,
            teleport_cooldown_scale: 0.6,
            emergency_teleport_chance: 0.4,
            tint: Some(Color::new(0.6, 0.0, 0.8, 1.0)),
        }
    }
}

impl Default for PhaseTuning {
    fn default() -> Self {
        Self::phase_one()
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct TeleportConfig {
    pub enabled: bool,
    pub cooldown: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Chance to reappear behind the target and strike.
    pub attack_chance: f32,
    pub behind_offset: f32,
    /// Radius searched around a candidate point for walkable ground.
    pub search_radius: f32,
    /// Fraction of the cooldown before the first teleport after phase 2.
    pub first_delay_scale: f32,
}

impl Default for TeleportConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            cooldown: 10.0,
            min_distance: 10.0,
            max_distance: 15.0,
            attack_chance: 0.7,
            behind_offset: 3.0,
            search_radius: 5.0,
            first_delay_scale: 0.5,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct MeleeConfig {
    pub cooldown: f32,
    /// Delay between starting the swing and applying damage.
    pub strike_delay: f32,
    /// Delay before movement resumes after a swing.
    pub recovery: f32,
}

impl Default for MeleeConfig {
    fn default() -> Self {
        Self {
            cooldown: 2.0,
            strike_delay: 0.5,
            recovery: 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ShockwaveConfig {
    pub enabled: bool,
    pub cooldown: f32,
    pub radius: f32,
    pub damage: f32,
    /// Seconds the boss stays rooted after the slam.
    pub recovery: f32,
    /// Fire a shockwave as part of the phase-2 transition.
    pub on_phase_two: bool,
}

impl Default for ShockwaveConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            cooldown: 8.0,
            radius: 6.0,
            damage: 15.0,
            recovery: 1.2,
            on_phase_two: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct HealingConfig {
    pub enabled: bool,
    pub cooldown: f32,
    pub amount: f32,
    pub flash_duration: f32,
    pub flash_tint: Color,
}

impl Default for HealingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            cooldown: 12.0,
            amount: 50.0,
            flash_duration: 0.4,
            flash_tint: Color::GREEN,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct DodgeConfig {
    pub cooldown: f32,
    /// Sideways hop on a successful dodge; `0` dodges in place.
    pub sidestep_distance: f32,
    /// Radius searched around the sidestep point for walkable ground.
    pub search_radius: f32,
}

impl Default for DodgeConfig {
    fn default() -> Self {
        Self {
            cooldown: 4.0,
            sidestep_distance: 2.5,
            search_radius: 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ReflectionConfig {
    pub enabled: bool,
    pub unlock_phase: Phase,
    pub chance: f32,
    /// Damage sent back to the attacker instead of being taken.
    pub damage: f32,
}

impl Default for ReflectionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            unlock_phase: Phase::Two,
            chance: 0.2,
            damage: 10.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PulseConfig {
    /// Seconds to fade from the current tint into the phase tint.
    pub fade_duration: f32,
    pub magnitude: f32,
    /// Angular frequency of the idle pulse (radians per second).
    pub frequency: f32,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            fade_duration: 2.0,
            magnitude: 0.2,
            frequency: 3.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct DeathConfig {
    pub despawn_delay: f32,
    pub scene_transition_delay: f32,
    pub next_scene: String,
}

impl Default for DeathConfig {
    fn default() -> Self {
        Self {
            despawn_delay: 5.0,
            scene_transition_delay: 5.0,
            next_scene: "MainMenu".to_owned(),
        }
    }
}

/// Complete tunable set for one boss.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct BossConfig {
    pub stats: StatsConfig,
    pub movement: MovementConfig,
    pub phase1: PhaseTuning,
    pub phase2: PhaseTuning,
    pub phase3: PhaseTuning,
    pub teleport: TeleportConfig,
    pub melee: MeleeConfig,
    pub shockwave: ShockwaveConfig,
    pub healing: HealingConfig,
    pub dodge: DodgeConfig,
    pub reflection: ReflectionConfig,
    pub pulse: PulseConfig,
    pub death: DeathConfig,
}

impl Default for BossConfig {
    fn default() -> Self {
        Self {
            stats: StatsConfig::default(),
            movement: MovementConfig::default(),
            phase1: PhaseTuning::phase_one(),
            phase2: PhaseTuning::phase_two(),
            phase3: PhaseTuning::phase_three(),
            teleport: TeleportConfig::default(),
            melee: MeleeConfig::default(),
            shockwave: ShockwaveConfig::default(),
            healing: HealingConfig::default(),
            dodge: DodgeConfig::default(),
            reflection: ReflectionConfig::default(),
            pulse: PulseConfig::default(),
            death: DeathConfig::default(),
        }
    }
}

impl BossConfig {
    /// Tuning for the given phase.
    pub fn tuning(&self, phase: Phase) -> &PhaseTuning {
        match phase {
            Phase::One => &self.phase1,
            Phase::Two => &self.phase2,
            Phase::Three => &self.phase3,
        }
    }

    /// Whether phase 3 can ever be reached.
    pub fn phase3_enabled(&self) -> bool {
        self.phase3.health_threshold > 0.0
    }

    /// Checks ranges, probabilities and threshold ordering.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let stats = &self.stats;
        positive("stats.max_health", stats.max_health)?;
        positive("stats.attack_range", stats.attack_range)?;
        positive("stats.chase_range", stats.chase_range)?;
        non_negative("stats.base_damage", stats.base_damage)?;
        positive("stats.walk_speed", stats.walk_speed)?;
        positive("stats.run_speed", stats.run_speed)?;
        positive("stats.strafe_speed", stats.strafe_speed)?;
        if stats.attack_range > stats.chase_range {
            return Err(ConfigError::RangeOrder {
                attack: stats.attack_range,
                chase: stats.chase_range,
            });
        }

        let movement = &self.movement;
        positive("movement.pattern_interval", movement.pattern_interval)?;
        chance("movement.strafe_chance", movement.strafe_chance)?;
        chance("movement.backpedal_margin", movement.backpedal_margin)?;
        non_negative("movement.strafe_distance", movement.strafe_distance)?;
        non_negative("movement.backpedal_distance", movement.backpedal_distance)?;

        for (phase, tuning) in [
            ("phase1", &self.phase1),
            ("phase2", &self.phase2),
            ("phase3", &self.phase3),
        ] {
            validate_tuning(tuning).map_err(|source| ConfigError::InPhase {
                phase,
                source: Box::new(source),
            })?;
        }

        let phase2 = self.phase2.health_threshold;
        let phase3 = self.phase3.health_threshold;
        non_negative("phase2.health_threshold", phase2)?;
        non_negative("phase3.health_threshold", phase3)?;
        if phase2 > stats.max_health {
            return Err(ConfigError::ThresholdAboveMax {
                threshold: phase2,
                max_health: stats.max_health,
            });
        }
        if self.phase3_enabled() && phase3 >= phase2 {
            return Err(ConfigError::ThresholdOrder { phase2, phase3 });
        }

        let teleport = &self.teleport;
        positive("teleport.cooldown", teleport.cooldown)?;
        non_negative("teleport.min_distance", teleport.min_distance)?;
        if teleport.min_distance > teleport.max_distance {
            return Err(ConfigError::InvertedRange {
                field: "teleport.distance",
                min: teleport.min_distance,
                max: teleport.max_distance,
            });
        }
        chance("teleport.attack_chance", teleport.attack_chance)?;
        positive("teleport.search_radius", teleport.search_radius)?;
        non_negative("teleport.first_delay_scale", teleport.first_delay_scale)?;

        non_negative("melee.cooldown", self.melee.cooldown)?;
        non_negative("melee.strike_delay", self.melee.strike_delay)?;
        non_negative("melee.recovery", self.melee.recovery)?;

        positive("shockwave.cooldown", self.shockwave.cooldown)?;
        non_negative("shockwave.radius", self.shockwave.radius)?;
        non_negative("shockwave.damage", self.shockwave.damage)?;
        non_negative("shockwave.recovery", self.shockwave.recovery)?;

        positive("healing.cooldown", self.healing.cooldown)?;
        non_negative("healing.amount", self.healing.amount)?;
        non_negative("healing.flash_duration", self.healing.flash_duration)?;

        non_negative("dodge.cooldown", self.dodge.cooldown)?;
        non_negative("dodge.sidestep_distance", self.dodge.sidestep_distance)?;
        positive("dodge.search_radius", self.dodge.search_radius)?;

        chance("reflection.chance", self.reflection.chance)?;
        non_negative("reflection.damage", self.reflection.damage)?;

        non_negative("pulse.fade_duration", self.pulse.fade_duration)?;
        chance("pulse.magnitude", self.pulse.magnitude)?;

        non_negative("death.despawn_delay", self.death.despawn_delay)?;
        non_negative(
            "death.scene_transition_delay",
            self.death.scene_transition_delay,
        )?;

        Ok(())
    }
}

fn validate_tuning(tuning: &PhaseTuning) -> Result<(), ConfigError> {
    non_negative("damage_multiplier", tuning.damage_multiplier)?;
    positive("speed_multiplier", tuning.speed_multiplier)?;
    chance("dodge_chance", tuning.dodge_chance)?;
    positive("attack_cooldown_scale", tuning.attack_cooldown_scale)?;
    positive("teleport_cooldown_scale", tuning.teleport_cooldown_scale)?;
    chance("emergency_teleport_chance", tuning.emergency_teleport_chance)?;
    Ok(())
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && !value.is_nan() {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

fn chance(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ChanceOutOfRange { field, value })
    }
}
