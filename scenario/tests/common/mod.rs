#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet};

use sim::{Actor, ActorId, ActorProvider, Location, MapQuery, Rotation, SimError, SimResult, Transform};

#[derive(Debug)]
pub struct TestMap {
    pub name: String,
    pub points: Vec<Transform>,
}

impl TestMap {
    pub fn new(points: Vec<Transform>) -> Self {
        Self {
            name: "Town01".to_string(),
            points,
        }
    }
}

impl MapQuery for TestMap {
    fn name(&self) -> &str {
        &self.name
    }

    fn spawn_points(&self) -> Vec<Transform> {
        self.points.clone()
    }
}

/// Records every provider call and keeps a live-actor table.
#[derive(Default)]
pub struct RecordingProvider {
    next_id: u32,
    pub live: BTreeMap<ActorId, (Actor, Transform)>,
    pub failing_models: BTreeSet<String>,
    /// Removal of these ids fails with a backend error.
    pub stuck_actors: BTreeSet<ActorId>,
    pub requests: Vec<(String, Transform)>,
    pub removals: Vec<ActorId>,
}

impl RecordingProvider {
    pub fn failing(models: &[&str]) -> Self {
        Self {
            failing_models: models.iter().map(|m| (*m).to_string()).collect(),
            ..Self::default()
        }
    }

    /// Places an actor in the world without going through a request.
    pub fn preload(&mut self, type_id: &str) -> Actor {
        self.next_id += 1;
        let actor = Actor::new(ActorId(self.next_id), type_id);
        self.live
            .insert(actor.id, (actor.clone(), Transform::default()));
        actor
    }

    pub fn removal_count(&self, id: ActorId) -> usize {
        self.removals.iter().filter(|r| **r == id).count()
    }
}

impl ActorProvider for RecordingProvider {
    fn request_new_actor(&mut self, model: &str, transform: &Transform) -> SimResult<Actor> {
        self.requests.push((model.to_string(), *transform));
        if self.failing_models.contains(model) {
            return Err(SimError::SpawnFailed {
                model: model.to_string(),
                reason: "spawn position occupied".to_string(),
            });
        }
        self.next_id += 1;
        let actor = Actor::new(ActorId(self.next_id), model);
        self.live.insert(actor.id, (actor.clone(), *transform));
        Ok(actor)
    }

    fn remove_actor_by_id(&mut self, id: ActorId) -> SimResult<()> {
        self.removals.push(id);
        if self.stuck_actors.contains(&id) {
            return Err(SimError::Backend(format!("actor {id} did not respond")));
        }
        self.live
            .remove(&id)
            .map(|_| ())
            .ok_or(SimError::UnknownActor { id })
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

pub fn point(x: f64, y: f64, z: f64, yaw: f64) -> Transform {
    Transform::new(Location::new(x, y, z), Rotation::new(0.0, yaw, 0.0))
}
