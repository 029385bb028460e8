//! Duel scenarios: where the fight happens and who the boss faces.
//!
//! A scenario is everything about a headless run that is not boss tuning:
//! the arena, spawn points, the scripted player, the frame step and the
//! seed. Scenarios load from RON or JSON and every field has a default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use encounter_core::{BossConfig, BossController, Pcg32, Vec3};

use crate::api::{Result, RuntimeError};
use crate::oracle::{
    Arena, ArenaNavigator, ClipPlayer, EffectLog, OracleBundle, PlayerSpec, SceneDirector,
    TrainingDummy,
};
use crate::simulation::Simulation;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DuelScenario {
    pub seed: u64,
    /// Fixed frame step in seconds.
    pub step: f32,
    /// Simulated seconds before the duel is called a draw.
    pub time_limit: f32,
    pub arena: Arena,
    pub boss_spawn: Vec3,
    pub player: PlayerSpec,
}

impl Default for DuelScenario {
    fn default() -> Self {
        Self {
            seed: 0,
            step: 1.0 / 60.0,
            time_limit: 300.0,
            arena: Arena::default(),
            boss_spawn: Vec3::ZERO,
            player: PlayerSpec::default(),
        }
    }
}

impl DuelScenario {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Parses a scenario from a RON string.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::InvalidScenario`] on syntax errors.
    pub fn from_ron(content: &str) -> Result<Self> {
        ron::from_str(content).map_err(|e| RuntimeError::InvalidScenario(e.to_string()))
    }

    /// Reads a scenario file (`.ron` or `.json`).
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::InvalidScenario`] if the file cannot be read
    /// or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            RuntimeError::InvalidScenario(format!("failed to read {}: {}", path.display(), e))
        })?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| RuntimeError::InvalidScenario(e.to_string())),
            _ => Self::from_ron(&content),
        }
    }

    /// # Errors
    ///
    /// Returns [`RuntimeError::InvalidScenario`] for a non-positive step,
    /// time limit or arena radius.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("step", self.step),
            ("time_limit", self.time_limit),
            ("arena.radius", self.arena.radius),
        ] {
            if value.is_nan() || value <= 0.0 {
                return Err(RuntimeError::InvalidScenario(format!(
                    "{field} must be positive (got {value})"
                )));
            }
        }
        Ok(())
    }

    /// Spawns the boss and its collaborators.
    ///
    /// # Errors
    ///
    /// Fails if the scenario or the boss config is invalid.
    pub fn build(&self, config: BossConfig) -> Result<Simulation> {
        self.validate()?;
        let walk_speed = config.stats.walk_speed;
        let boss = BossController::new(config, Pcg32::seeded(self.seed))?;

        let oracles = OracleBundle {
            navigator: ArenaNavigator::new(self.arena, self.boss_spawn, walk_speed),
            clips: ClipPlayer::new(),
            effects: EffectLog::default(),
            player: TrainingDummy::new(self.player.clone(), self.arena.center),
            director: SceneDirector::new(),
        };

        tracing::info!(
            seed = self.seed,
            step = self.step,
            time_limit = self.time_limit,
            "duel scenario built"
        );
        Ok(Simulation::new(boss, oracles, self.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_ron_keeps_defaults() {
        let scenario = DuelScenario::from_ron("(seed: 9, player: (shot_damage: 40.0))").unwrap();
        assert_eq!(scenario.seed, 9);
        assert_eq!(scenario.player.shot_damage, 40.0);
        assert_eq!(scenario.player.fire_interval, 0.5);
        assert_eq!(scenario.arena, Arena::default());
    }

    #[test]
    fn rejects_zero_step() {
        let scenario = DuelScenario {
            step: 0.0,
            ..DuelScenario::default()
        };
        assert!(matches!(
            scenario.build(BossConfig::default()),
            Err(RuntimeError::InvalidScenario(_))
        ));
    }

    #[test]
    fn invalid_boss_config_is_reported() {
        let mut config = BossConfig::default();
        config.stats.max_health = -1.0;
        assert!(matches!(
            DuelScenario::default().build(config),
            Err(RuntimeError::InvalidConfig(_))
        ));
    }
}
