//! Topic-based event bus for encounter events.
//!
//! The frame loop publishes every [`EncounterEvent`](encounter_core::EncounterEvent)
//! the boss records; consumers subscribe only to the topics they need.

mod bus;

pub use bus::{Event, EventBus, Topic};
