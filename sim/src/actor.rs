//! Actor handles.

use std::fmt;

/// Prefix shared by every vehicle blueprint id.
pub const VEHICLE_PREFIX: &str = "vehicle.";

/// Simulator-assigned actor identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorId(pub u32);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Handle to an actor living in the simulator.
///
/// The handle does not own simulator state. Live properties such as the
/// current transform are queried through [`crate::ActorProvider`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Actor {
    pub id: ActorId,
    /// Blueprint id, e.g. `vehicle.audi.a2`.
    pub type_id: String,
}

impl Actor {
    #[must_use]
    pub fn new(id: ActorId, type_id: impl Into<String>) -> Self {
        Self {
            id,
            type_id: type_id.into(),
        }
    }

    #[must_use]
    pub fn is_vehicle(&self) -> bool {
        self.type_id.starts_with(VEHICLE_PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vehicle_detection_uses_blueprint_prefix() {
        assert!(Actor::new(ActorId(1), "vehicle.audi.a2").is_vehicle());
        assert!(!Actor::new(ActorId(2), "walker.pedestrian.0001").is_vehicle());
        assert!(!Actor::new(ActorId(3), "sensor.other.collision").is_vehicle());
    }
}
