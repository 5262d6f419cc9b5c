//! Scenario lifecycle and the open-loop vehicle scenario.
//!
//! A scenario wires simulator building blocks together: it spawns actors
//! through an [`sim::ActorProvider`], describes what they should do as an
//! [`atomics::Sequence`], and names the [`atomics::Criterion`] values that
//! decide pass or fail. Ticking the sequence and evaluating the criteria is
//! the runner's job.
//!
//! # Example
//!
//! ```ignore
//! let mut rng = rand::rng();
//! let mut scenario = OpenLoopScenario::new(
//!     &map,
//!     &mut provider,
//!     &mut rng,
//!     Vec::new(),
//!     ScenarioConfiguration::new("OpenLoopScenario_1"),
//!     OpenLoopParams::default(),
//!     ScenarioOptions::default(),
//! )?;
//! let behavior = scenario.create_behavior(&provider)?;
//! let criteria = scenario.criteria()?;
//! // hand both to the engine, then:
//! scenario.remove_all_actors(&mut provider)?;
//! ```

mod basic;
mod config;
mod error;
mod open_loop;

pub use basic::{BasicScenario, Scenario};
pub use config::{
    OpenLoopParams, ScenarioConfiguration, ScenarioOptions, FALLBACK_VEHICLE_MODEL,
    PREFERRED_VEHICLE_MODEL,
};
pub use error::{ScenarioError, ScenarioResult};
pub use open_loop::{
    clear_vehicles, list_spawn_points, spawn_with_fallback, OpenLoopScenario,
    BEHAVIOR_SEQUENCE_NAME,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        let _ = OpenLoopParams::default();
        let _ = ScenarioOptions::default();
        let _ = ScenarioConfiguration::default();
        let _ = PREFERRED_VEHICLE_MODEL;
        let _ = FALLBACK_VEHICLE_MODEL;
        let _ = BEHAVIOR_SEQUENCE_NAME;

        let _: ScenarioResult<()> = Ok(());
    }

    #[test]
    fn scenario_trait_is_object_safe() {
        fn takes_scenario(_: &dyn Scenario) {}
        let _ = takes_scenario;
    }
}
