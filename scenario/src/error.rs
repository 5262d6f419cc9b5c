//! Error types for scenario construction and teardown.

use std::fmt;

use sim::SimError;

/// Result type for scenario operations.
pub type ScenarioResult<T> = Result<T, ScenarioError>;

/// Errors that can occur while building or tearing down a scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScenarioError {
    /// The map offered no spawn points.
    NoSpawnPoints { map: String },

    /// Both the preferred and the fallback model failed to spawn.
    Spawn {
        preferred: SimError,
        fallback: SimError,
    },

    /// The scenario's vehicle was already torn down.
    VehicleMissing,

    /// Any other simulator failure.
    Sim(SimError),
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSpawnPoints { map } => write!(f, "map '{map}' has no spawn points"),
            Self::Spawn {
                preferred,
                fallback,
            } => {
                write!(
                    f,
                    "vehicle spawn failed: {preferred}; fallback also failed: {fallback}"
                )
            }
            Self::VehicleMissing => write!(f, "scenario vehicle has already been removed"),
            Self::Sim(err) => write!(f, "simulator error: {err}"),
        }
    }
}

impl std::error::Error for ScenarioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Spawn { fallback, .. } => Some(fallback),
            Self::Sim(err) => Some(err),
            Self::NoSpawnPoints { .. } | Self::VehicleMissing => None,
        }
    }
}

impl From<SimError> for ScenarioError {
    fn from(err: SimError) -> Self {
        Self::Sim(err)
    }
}
