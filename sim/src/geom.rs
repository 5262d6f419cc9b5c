//! Positions, orientations and transforms in simulator world space.
//!
//! Units follow the simulator: meters for locations, degrees for rotations.

use std::fmt;

/// A point in world space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Location {
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns this location moved up by `dz`.
    #[must_use]
    pub fn raised(self, dz: f64) -> Self {
        Self {
            z: self.z + dz,
            ..self
        }
    }
}

/// Orientation in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rotation {
    pub pitch: f64,
    pub yaw: f64,
    pub roll: f64,
}

impl Rotation {
    #[must_use]
    pub const fn new(pitch: f64, yaw: f64, roll: f64) -> Self {
        Self { pitch, yaw, roll }
    }
}

/// Location plus orientation, e.g. a map spawn point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    pub location: Location,
    pub rotation: Rotation,
}

impl Transform {
    #[must_use]
    pub const fn new(location: Location, rotation: Rotation) -> Self {
        Self { location, rotation }
    }

    /// Returns this transform moved up by `dz`, keeping the orientation.
    #[must_use]
    pub fn raised(self, dz: f64) -> Self {
        Self {
            location: self.location.raised(dz),
            rotation: self.rotation,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Location(x={:.6}, y={:.6}, z={:.6})",
            self.x, self.y, self.z
        )
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rotation(pitch={:.6}, yaw={:.6}, roll={:.6})",
            self.pitch, self.yaw, self.roll
        )
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Transform({}, {})", self.location, self.rotation)
    }
}
