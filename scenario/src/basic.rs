//! Base scenario bookkeeping and the lifecycle every scenario implements.

use std::time::Duration;

use atomics::{Criterion, Sequence};
use sim::{Actor, ActorProvider};
use tracing::debug;

use crate::{ScenarioConfiguration, ScenarioOptions, ScenarioResult};

/// State shared by every scenario: identity, flags and tracked actors.
#[derive(Debug, Clone, PartialEq)]
pub struct BasicScenario {
    pub name: String,
    pub ego_vehicles: Vec<Actor>,
    /// Non-ego actors spawned by the scenario, removed on teardown.
    pub other_actors: Vec<Actor>,
    pub config: ScenarioConfiguration,
    pub options: ScenarioOptions,
    /// Overall run timeout. Enforced by the runner, not by the scenario.
    pub timeout: Duration,
}

impl BasicScenario {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        ego_vehicles: Vec<Actor>,
        config: ScenarioConfiguration,
        options: ScenarioOptions,
        timeout: Duration,
    ) -> Self {
        Self {
            name: name.into(),
            ego_vehicles,
            other_actors: Vec::new(),
            config,
            options,
            timeout,
        }
    }

    /// Removes every tracked non-ego actor and clears the list.
    ///
    /// Actors the provider no longer knows are skipped. Removal continues
    /// past other failures; the first one is returned.
    pub fn remove_all_actors(&mut self, provider: &mut dyn ActorProvider) -> ScenarioResult<()> {
        let mut first_err = None;
        for actor in std::mem::take(&mut self.other_actors) {
            match provider.remove_actor_by_id(actor.id) {
                Ok(()) => debug!(scenario = %self.name, actor = %actor.id, "actor removed"),
                Err(err) if err.is_unknown_actor() => {
                    debug!(scenario = %self.name, actor = %actor.id, "actor already gone");
                }
                Err(err) => {
                    first_err.get_or_insert(err);
                }
            }
        }
        match first_err {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }
}

/// Lifecycle contract between a scenario and the runner that executes it.
///
/// Construction (including actor initialization) is scenario-specific.
/// After construction the runner asks for the behavior tree and the
/// criteria, executes them, and finally calls
/// [`Scenario::remove_all_actors`].
pub trait Scenario {
    fn base(&self) -> &BasicScenario;

    /// Builds the behavior the engine runs to completion.
    fn create_behavior(&self, provider: &dyn ActorProvider) -> ScenarioResult<Sequence>;

    /// Builds the pass/fail evaluators for this scenario.
    fn create_test_criteria(&self) -> ScenarioResult<Vec<Criterion>>;

    /// Releases every actor the scenario owns.
    fn remove_all_actors(&mut self, provider: &mut dyn ActorProvider) -> ScenarioResult<()>;

    fn name(&self) -> &str {
        &self.base().name
    }

    fn timeout(&self) -> Duration {
        self.base().timeout
    }

    /// Criteria to attach to the run; empty when criteria are disabled.
    fn criteria(&self) -> ScenarioResult<Vec<Criterion>> {
        if self.base().options.criteria_enable {
            self.create_test_criteria()
        } else {
            Ok(Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use sim::{ActorId, SimError, SimResult, Transform};

    use super::*;
    use crate::ScenarioError;

    struct Registry {
        live: BTreeSet<ActorId>,
        broken: Option<ActorId>,
    }

    impl ActorProvider for Registry {
        fn request_new_actor(&mut self, model: &str, _: &Transform) -> SimResult<Actor> {
            Err(SimError::SpawnFailed {
                model: model.to_string(),
                reason: "registry is read-only".to_string(),
            })
        }

        fn remove_actor_by_id(&mut self, id: ActorId) -> SimResult<()> {
            if self.broken == Some(id) {
                return Err(SimError::Backend("timeout".into()));
            }
            if self.live.remove(&id) {
                Ok(())
            } else {
                Err(SimError::UnknownActor { id })
            }
        }

        fn actor_transform(&self, id: ActorId) -> SimResult<Transform> {
            Err(SimError::UnknownActor { id })
        }

        fn actors(&self) -> Vec<Actor> {
            Vec::new()
        }
    }

    fn base_with(actors: &[u32]) -> BasicScenario {
        let mut base = BasicScenario::new(
            "Test",
            Vec::new(),
            ScenarioConfiguration::default(),
            ScenarioOptions::default(),
            Duration::from_secs(10),
        );
        base.other_actors = actors
            .iter()
            .map(|&id| Actor::new(ActorId(id), "vehicle.audi.a2"))
            .collect();
        base
    }

    #[test]
    fn remove_all_actors_clears_list_and_skips_missing() {
        let mut base = base_with(&[1, 2, 3]);
        let mut registry = Registry {
            live: [ActorId(1), ActorId(3)].into_iter().collect(),
            broken: None,
        };
        base.remove_all_actors(&mut registry).unwrap();
        assert!(base.other_actors.is_empty());
        assert!(registry.live.is_empty());
    }

    #[test]
    fn remove_all_actors_reports_first_failure_but_keeps_going() {
        let mut base = base_with(&[1, 2, 3]);
        let mut registry = Registry {
            live: [ActorId(1), ActorId(2), ActorId(3)].into_iter().collect(),
            broken: Some(ActorId(2)),
        };
        let err = base.remove_all_actors(&mut registry).unwrap_err();
        assert!(matches!(err, ScenarioError::Sim(SimError::Backend(_))));
        assert!(base.other_actors.is_empty());
        assert_eq!(registry.live.iter().copied().collect::<Vec<_>>(), vec![ActorId(2)]);
    }
}
