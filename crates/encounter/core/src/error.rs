//! Common error infrastructure for encounter-core.
//!
//! Action failures never escape the controller: the arbiter logs them and
//! the boss simply does something else this tick. Only configuration
//! errors reach the caller, from [`BossController::new`].
//!
//! [`BossController::new`]: crate::BossController::new

use crate::env::OracleError;
use crate::timers::Cooldown;

/// Severity level of an error, used for logging and recovery.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The action may succeed on a later tick.
    ///
    /// Examples: no target, destination off the navigable surface
    Recoverable,

    /// The request can never succeed as issued.
    ///
    /// Examples: feature locked in the current phase
    Validation,

    /// Unexpected state inconsistency. Indicates a bug.
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all encounter-core errors.
pub trait EncounterError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Static identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Why a boss action did not run.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ActionError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("no navigable point within {radius} of the requested destination")]
    NoNavigableSurface { radius: f32 },

    #[error("{0} cooldown not ready")]
    OnCooldown(Cooldown),

    #[error("an uninterruptible clip is playing")]
    AnimationLocked,

    #[error("boss is dead")]
    Dead,
}

impl EncounterError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Oracle(err) => err.severity(),
            Self::NoNavigableSurface { .. }
            | Self::OnCooldown(_)
            | Self::AnimationLocked => ErrorSeverity::Recoverable,
            Self::Dead => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Oracle(err) => err.error_code(),
            Self::NoNavigableSurface { .. } => "ACTION_NO_NAVIGABLE_SURFACE",
            Self::OnCooldown(_) => "ACTION_ON_COOLDOWN",
            Self::AnimationLocked => "ACTION_ANIMATION_LOCKED",
            Self::Dead => "ACTION_DEAD",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oracle_errors_delegate_classification() {
        let err = ActionError::from(OracleError::TargetNotAvailable);
        assert_eq!(err.severity(), ErrorSeverity::Recoverable);
        assert_eq!(err.error_code(), "ORACLE_TARGET_NOT_AVAILABLE");
        assert_eq!(err.to_string(), "no target in the encounter");
    }

    #[test]
    fn cooldown_errors_name_the_timer() {
        let err = ActionError::OnCooldown(Cooldown::Teleport);
        assert_eq!(err.to_string(), "teleport cooldown not ready");
        assert!(err.severity().is_recoverable());
        assert_eq!(ActionError::Dead.severity(), ErrorSeverity::Validation);
    }
}
