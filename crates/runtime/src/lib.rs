//! Headless runtime for boss encounters.
//!
//! This crate gives the decision core a world to act in: in-memory
//! collaborators, a scripted opponent, a fixed-step [`Simulation`] and a
//! real-time [`FrameLoop`] that publishes encounter events on an
//! [`EventBus`].
//!
//! Modules are organized by responsibility:
//! - [`scenario`] describes a duel and builds its simulation
//! - [`simulation`] steps boss and collaborators on a fixed clock
//! - [`frame_loop`] paces a simulation in real time on tokio
//! - [`events`] provides the topic-based event bus
//! - [`oracle`] hosts the in-memory collaborators
//! - [`api`] exposes errors and the end-of-duel summary
pub mod api;
pub mod events;
pub mod frame_loop;
pub mod oracle;
pub mod scenario;
pub mod simulation;

pub use api::{DuelOutcome, DuelSummary, Result, RuntimeError};
pub use events::{Event, EventBus, Topic};
pub use frame_loop::{FrameLoop, StopHandle};
pub use oracle::{
    Arena, ArenaNavigator, ClipPlayer, EffectLog, OracleBundle, PlayerSpec, SceneDirector,
    TrainingDummy,
};
pub use scenario::DuelScenario;
pub use simulation::Simulation;
