//! In-memory actor registry for planning runs without a simulator.
//!
//! The registry hands out ids and remembers where each actor was placed.
//! It never moves actors or detects collisions.

use std::collections::{BTreeMap, BTreeSet};

use sim::{Actor, ActorId, ActorProvider, SimError, SimResult, Transform};
use tracing::trace;

#[derive(Debug, Default)]
pub struct DryRunProvider {
    next_id: u32,
    live: BTreeMap<ActorId, (Actor, Transform)>,
    unavailable: BTreeSet<String>,
    spawn_requests: usize,
    removals: usize,
}

impl DryRunProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every request for `model` fail as if the simulator refused it.
    #[must_use]
    pub fn with_unavailable<I, S>(mut self, models: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.unavailable.extend(models.into_iter().map(Into::into));
        self
    }

    /// Adds an actor that was in the world before the scenario started.
    pub fn preload(&mut self, type_id: &str, transform: Transform) -> Actor {
        let actor = Actor::new(self.allocate_id(), type_id);
        self.live.insert(actor.id, (actor.clone(), transform));
        actor
    }

    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    #[must_use]
    pub const fn spawn_requests(&self) -> usize {
        self.spawn_requests
    }

    #[must_use]
    pub const fn removals(&self) -> usize {
        self.removals
    }

    fn allocate_id(&mut self) -> ActorId {
        self.next_id += 1;
        ActorId(self.next_id)
    }
}

impl ActorProvider for DryRunProvider {
    fn request_new_actor(&mut self, model: &str, transform: &Transform) -> SimResult<Actor> {
        self.spawn_requests += 1;
        if self.unavailable.contains(model) {
            return Err(SimError::SpawnFailed {
                model: model.to_string(),
                reason: "model marked unavailable".to_string(),
            });
        }
        let actor = Actor::new(self.allocate_id(), model);
        trace!(actor = %actor.id, model, at = %transform, "dry-run spawn");
        self.live.insert(actor.id, (actor.clone(), *transform));
        Ok(actor)
    }

    fn remove_actor_by_id(&mut self, id: ActorId) -> SimResult<()> {
        if self.live.remove(&id).is_none() {
            return Err(SimError::UnknownActor { id });
        }
        self.removals += 1;
        Ok(())
    }

    fn actor_transform(&self, id: ActorId) -> SimResult<Transform> {
        self.live
            .get(&id)
            .map(|(_, transform)| *transform)
            .ok_or(SimError::UnknownActor { id })
    }

    fn actors(&self) -> Vec<Actor> {
        self.live.values().map(|(actor, _)| actor.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sim::Location;

    #[test]
    fn spawn_and_remove() {
        let mut provider = DryRunProvider::new();
        let at = Transform::new(Location::new(1.0, 2.0, 3.0), Default::default());
        let actor = provider.request_new_actor("vehicle.audi.a2", &at).unwrap();

        assert_eq!(provider.actor_transform(actor.id).unwrap(), at);
        assert_eq!(provider.live_count(), 1);

        provider.remove_actor_by_id(actor.id).unwrap();
        assert_eq!(provider.live_count(), 0);
        assert_eq!(provider.removals(), 1);
        assert!(provider
            .remove_actor_by_id(actor.id)
            .unwrap_err()
            .is_unknown_actor());
    }

    #[test]
    fn unavailable_models_fail_but_count_as_requests() {
        let mut provider = DryRunProvider::new().with_unavailable(["vehicle.nissan.patrol"]);
        let err = provider
            .request_new_actor("vehicle.nissan.patrol", &Transform::default())
            .unwrap_err();

        assert!(matches!(err, SimError::SpawnFailed { .. }));
        assert_eq!(provider.spawn_requests(), 1);
        assert_eq!(provider.live_count(), 0);
    }

    #[test]
    fn ids_are_unique_across_preload_and_spawn() {
        let mut provider = DryRunProvider::new();
        let parked = provider.preload("vehicle.tesla.model3", Transform::default());
        let spawned = provider
            .request_new_actor("vehicle.audi.a2", &Transform::default())
            .unwrap();
        assert_ne!(parked.id, spawned.id);
        assert_eq!(provider.actors().len(), 2);
    }
}
