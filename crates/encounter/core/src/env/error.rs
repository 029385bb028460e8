//! Collaborator access errors.

use crate::error::{EncounterError, ErrorSeverity};

/// An optional collaborator is not attached to the environment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    #[error("no target in the encounter")]
    TargetNotAvailable,

    #[error("EffectsOracle not available")]
    EffectsNotAvailable,

    #[error("ProgressionOracle not available")]
    ProgressionNotAvailable,
}

impl EncounterError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::TargetNotAvailable => "ORACLE_TARGET_NOT_AVAILABLE",
            Self::EffectsNotAvailable => "ORACLE_EFFECTS_NOT_AVAILABLE",
            Self::ProgressionNotAvailable => "ORACLE_PROGRESSION_NOT_AVAILABLE",
        }
    }
}
