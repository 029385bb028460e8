//! Topic-based event bus implementation.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use encounter_core::{EncounterEvent, EventRecord};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Hits, dodges, strikes and slams
    Combat,
    /// Phase changes, heals and movement pattern changes
    Phase,
    /// Death, despawn and scene transition
    Lifecycle,
}

impl Topic {
    pub const ALL: [Topic; 3] = [Topic::Combat, Topic::Phase, Topic::Lifecycle];

    pub fn of(event: &EncounterEvent) -> Self {
        match event {
            EncounterEvent::PhaseChanged { .. }
            | EncounterEvent::Healed { .. }
            | EncounterEvent::PatternChanged { .. } => Topic::Phase,
            EncounterEvent::Died { .. }
            | EncounterEvent::Despawned
            | EncounterEvent::SceneTransition { .. } => Topic::Lifecycle,
            _ => Topic::Combat,
        }
    }

    const fn slot(self) -> usize {
        match self {
            Topic::Combat => 0,
            Topic::Phase => 1,
            Topic::Lifecycle => 2,
        }
    }
}

/// Event wrapper that carries the frame it was published on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub frame: u64,
    pub record: EventRecord,
}

impl Event {
    pub fn topic(&self) -> Topic {
        Topic::of(&self.record.event)
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Publishing never blocks the frame loop: events
/// sent while nobody listens are dropped, and slow receivers observe
/// [`broadcast::error::RecvError::Lagged`].
#[derive(Clone)]
pub struct EventBus {
    channels: Arc<[broadcast::Sender<Event>; 3]>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let channels = Topic::ALL.map(|_| broadcast::channel(capacity).0);
        Self {
            channels: Arc::new(channels),
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.channels[topic.slot()].send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.channels[topic.slot()].subscribe()
    }

    /// Subscribe to multiple topics
    pub fn subscribe_multiple(&self, topics: &[Topic]) -> Vec<(Topic, broadcast::Receiver<Event>)> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
