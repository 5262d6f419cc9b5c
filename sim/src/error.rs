//! Error types reported by simulator collaborators.

use std::fmt;

use crate::ActorId;

/// Result type for simulator operations.
pub type SimResult<T> = Result<T, SimError>;

/// Errors a simulator backend can report back to a scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SimError {
    /// The simulator refused to spawn the actor (collision at the spawn
    /// transform, blueprint unavailable on this map, and so on).
    SpawnFailed { model: String, reason: String },

    /// No live actor has this id.
    UnknownActor { id: ActorId },

    /// The backend itself is unreachable or misbehaving.
    Backend(String),
}

impl SimError {
    /// Returns true if the error means the actor no longer exists.
    #[must_use]
    pub const fn is_unknown_actor(&self) -> bool {
        matches!(self, Self::UnknownActor { .. })
    }
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SpawnFailed { model, reason } => {
                write!(f, "failed to spawn '{model}': {reason}")
            }
            Self::UnknownActor { id } => write!(f, "no actor with id {id}"),
            Self::Backend(msg) => write!(f, "simulator backend error: {msg}"),
        }
    }
}

impl std::error::Error for SimError {}
