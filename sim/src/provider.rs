//! Collaborator traits implemented by a simulator backend.

use crate::{Actor, ActorId, SimResult, Transform};

/// Read access to the loaded map.
pub trait MapQuery {
    /// Map name, e.g. `Town01`.
    fn name(&self) -> &str;

    /// Recommended spawn transforms for vehicles.
    fn spawn_points(&self) -> Vec<Transform>;
}

/// Actor provisioning: spawn, look up and remove actors.
pub trait ActorProvider {
    /// Spawns an actor of blueprint `model` at `transform`.
    fn request_new_actor(&mut self, model: &str, transform: &Transform) -> SimResult<Actor>;

    /// Removes the actor with `id`. Returns [`crate::SimError::UnknownActor`]
    /// if no such actor is alive.
    fn remove_actor_by_id(&mut self, id: ActorId) -> SimResult<()>;

    /// Current transform of a live actor.
    fn actor_transform(&self, id: ActorId) -> SimResult<Transform>;

    /// Every live actor in the world, including ones this scenario did not spawn.
    fn actors(&self) -> Vec<Actor>;
}
