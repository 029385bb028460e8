//! Observable record of what the boss did.
//!
//! The controller appends one [`EncounterEvent`] per top-level action and
//! per continuation that fires. Callers drain them after each call.

use std::collections::VecDeque;

use crate::animation::Clip;
use crate::math::Vec3;
use crate::movement::MovementPattern;
use crate::phase::Phase;
use crate::time::GameTime;

/// Where a teleport was aimed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TeleportKind {
    /// Directly behind the target, followed by a strike.
    Ambush,
    /// A random point on the ring around the target.
    Reposition,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EncounterEvent {
    PhaseChanged {
        from: Phase,
        to: Phase,
    },
    Teleported {
        kind: TeleportKind,
        from: Vec3,
        to: Vec3,
        emergency: bool,
    },
    TeleportAborted {
        kind: TeleportKind,
        emergency: bool,
    },
    AreaAttack {
        hit: bool,
        damage: f32,
    },
    Healed {
        amount: f32,
        health: f32,
    },
    PatternChanged {
        pattern: MovementPattern,
    },
    MeleeStarted {
        clip: Clip,
    },
    MeleeLanded {
        damage: f32,
    },
    MeleeMissed {
        distance: f32,
    },
    Dodged {
        from: Vec3,
        to: Vec3,
    },
    Reflected {
        damage: f32,
    },
    Damaged {
        amount: f32,
        health: f32,
    },
    Died {
        clip: Clip,
    },
    Despawned,
    SceneTransition {
        scene: String,
    },
}

impl EncounterEvent {
    /// Short snake_case name, used as a log field and a summary key.
    pub fn name(&self) -> &'static str {
        match self {
            Self::PhaseChanged { .. } => "phase_changed",
            Self::Teleported { .. } => "teleported",
            Self::TeleportAborted { .. } => "teleport_aborted",
            Self::AreaAttack { .. } => "area_attack",
            Self::Healed { .. } => "healed",
            Self::PatternChanged { .. } => "pattern_changed",
            Self::MeleeStarted { .. } => "melee_started",
            Self::MeleeLanded { .. } => "melee_landed",
            Self::MeleeMissed { .. } => "melee_missed",
            Self::Dodged { .. } => "dodged",
            Self::Reflected { .. } => "reflected",
            Self::Damaged { .. } => "damaged",
            Self::Died { .. } => "died",
            Self::Despawned => "despawned",
            Self::SceneTransition { .. } => "scene_transition",
        }
    }
}

/// An event with the encounter time it happened at.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventRecord {
    pub at: GameTime,
    pub event: EncounterEvent,
}

/// Event buffer owned by the controller.
///
/// Holds at most [`EventLog::CAPACITY`] undrained records; past that the
/// oldest are dropped.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    records: VecDeque<EventRecord>,
    dropped: u64,
}

impl EventLog {
    pub const CAPACITY: usize = 1024;

    pub fn push(&mut self, at: GameTime, event: EncounterEvent) {
        tracing::trace!(event = event.name(), %at, "encounter event");
        if self.records.len() == Self::CAPACITY {
            self.records.pop_front();
            if self.dropped == 0 {
                tracing::warn!(
                    capacity = Self::CAPACITY,
                    "event log full; dropping oldest events until drained"
                );
            }
            self.dropped += 1;
        }
        self.records.push_back(EventRecord { at, event });
    }

    pub fn drain(&mut self) -> Vec<EventRecord> {
        if self.dropped > 0 {
            tracing::debug!(dropped = self.dropped, "events lost before drain");
            self.dropped = 0;
        }
        self.records.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undrained_log_keeps_only_the_newest_events() {
        let mut log = EventLog::default();
        for i in 0..EventLog::CAPACITY + 10 {
            log.push(GameTime(i as f32), EncounterEvent::Despawned);
        }
        assert_eq!(log.len(), EventLog::CAPACITY);

        let records = log.drain();
        assert_eq!(records[0].at, GameTime(10.0));
        assert!(log.is_empty());
    }
}
