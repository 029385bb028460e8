//! End-of-duel report.
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use encounter_core::Phase;

use super::errors::{Result, RuntimeError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuelOutcome {
    BossDefeated,
    PlayerDefeated,
    /// The duel hit its time limit with both sides standing.
    TimedOut,
}

impl fmt::Display for DuelOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DuelOutcome::BossDefeated => "boss defeated",
            DuelOutcome::PlayerDefeated => "player defeated",
            DuelOutcome::TimedOut => "timed out",
        };
        write!(f, "{}", label)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DuelSummary {
    pub seed: u64,
    pub outcome: DuelOutcome,
    /// Simulated seconds.
    pub elapsed: f32,
    pub frames: u64,
    pub boss_health: f32,
    pub final_phase: Phase,
    pub player_health: f32,
    pub damage_to_boss: f32,
    pub damage_to_player: f32,
    /// Scene requested by the boss after its death, if any.
    pub next_scene: Option<String>,
    /// Event counts keyed by [`EncounterEvent::name`](encounter_core::EncounterEvent::name).
    pub events: BTreeMap<String, usize>,
}

impl DuelSummary {
    pub fn count(&self, event: &str) -> usize {
        self.events.get(event).copied().unwrap_or(0)
    }

    /// # Errors
    ///
    /// Returns [`RuntimeError::Summary`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(RuntimeError::Summary)
    }
}

impl fmt::Display for DuelSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} after {:.1}s ({} frames, seed {})",
            self.outcome, self.elapsed, self.frames, self.seed
        )?;
        writeln!(
            f,
            "boss: {:.0} hp, reached {}",
            self.boss_health, self.final_phase
        )?;
        writeln!(f, "player: {:.0} hp", self.player_health)?;
        writeln!(
            f,
            "damage dealt: {:.0} to boss, {:.0} to player",
            self.damage_to_boss, self.damage_to_player
        )?;
        if let Some(scene) = &self.next_scene {
            writeln!(f, "next scene: {}", scene)?;
        }
        for (name, count) in &self.events {
            writeln!(f, "  {:<18} {}", name, count)?;
        }
        Ok(())
    }
}
