//! Unified error types surfaced by the runtime API.
use thiserror::Error;

use encounter_core::ConfigError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("boss config rejected")]
    InvalidConfig(#[from] ConfigError),

    #[error("invalid scenario: {0}")]
    InvalidScenario(String),

    #[error("failed to encode duel summary")]
    Summary(#[source] serde_json::Error),
}
