//! Scenario configuration and tunable parameters.

use std::time::Duration;

use sim::Transform;

/// Blueprint requested first for the scenario vehicle.
pub const PREFERRED_VEHICLE_MODEL: &str = "vehicle.nissan.patrol";

/// Blueprint requested once if the preferred one fails to spawn.
pub const FALLBACK_VEHICLE_MODEL: &str = "vehicle.audi.a2";

/// Description of a scenario instance as loaded by a runner.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScenarioConfiguration {
    pub name: String,
    pub town: Option<String>,
    pub trigger_points: Vec<Transform>,
}

impl ScenarioConfiguration {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Flags every scenario accepts at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenarioOptions {
    /// Allow the scenario to pick parameters at random.
    pub randomize: bool,
    /// Emit extra diagnostics while building.
    pub debug_mode: bool,
    /// Attach evaluation criteria to the run.
    pub criteria_enable: bool,
}

impl Default for ScenarioOptions {
    fn default() -> Self {
        Self {
            randomize: false,
            debug_mode: false,
            criteria_enable: true,
        }
    }
}

/// Parameters of the open-loop scenario.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OpenLoopParams {
    /// Cruise speed held by the vehicle, in m/s.
    pub vehicle_speed: f64,
    /// Added to the spawn point's z before spawning, in meters.
    pub spawn_z_offset: f64,
    pub preferred_model: String,
    pub fallback_model: String,
    /// Overall run timeout, enforced by the runner.
    #[cfg_attr(feature = "serde", serde(with = "duration_secs"))]
    pub timeout: Duration,
    /// Remove every vehicle already in the world before spawning.
    pub clear_existing_vehicles: bool,
}

impl Default for OpenLoopParams {
    fn default() -> Self {
        Self {
            vehicle_speed: 40.0,
            // keeps the wheels clear of the road mesh at spawn
            spawn_z_offset: 1.0,
            preferred_model: PREFERRED_VEHICLE_MODEL.to_string(),
            fallback_model: FALLBACK_VEHICLE_MODEL.to_string(),
            timeout: Duration::from_secs(1000),
            clear_existing_vehicles: true,
        }
    }
}

#[cfg(feature = "serde")]
mod duration_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(value.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_match_scenario_constants() {
        let params = OpenLoopParams::default();
        assert!((params.vehicle_speed - 40.0).abs() < f64::EPSILON);
        assert!((params.spawn_z_offset - 1.0).abs() < f64::EPSILON);
        assert_eq!(params.preferred_model, PREFERRED_VEHICLE_MODEL);
        assert_eq!(params.fallback_model, FALLBACK_VEHICLE_MODEL);
        assert_eq!(params.timeout, Duration::from_secs(1000));
        assert!(params.clear_existing_vehicles);
    }

    #[test]
    fn default_options_enable_criteria() {
        let options = ScenarioOptions::default();
        assert!(options.criteria_enable);
        assert!(!options.debug_mode);
        assert!(!options.randomize);
    }

    #[test]
    fn configuration_new_sets_name_only() {
        let config = ScenarioConfiguration::new("OpenLoopScenario_1");
        assert_eq!(config.name, "OpenLoopScenario_1");
        assert!(config.town.is_none());
        assert!(config.trigger_points.is_empty());
    }
}
