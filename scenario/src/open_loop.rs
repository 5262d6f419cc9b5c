//! Open-loop constant-speed scenario.
//!
//! One vehicle is spawned at a random map spawn point, placed, held at a
//! fixed forward speed, and destroyed. A collision criterion watches it for
//! the whole run. No ego vehicle is involved.

use atomics::{ActorDestroy, ActorTransformSetter, CollisionTest, Criterion, KeepVelocity, Sequence};
use rand::seq::IndexedRandom;
use rand::Rng;
use sim::{Actor, ActorProvider, MapQuery, SimError, Transform};
use tracing::{debug, info, warn};

use crate::{
    BasicScenario, OpenLoopParams, Scenario, ScenarioConfiguration, ScenarioError,
    ScenarioOptions, ScenarioResult,
};

/// Name of the behavior sequence produced by [`OpenLoopScenario`].
pub const BEHAVIOR_SEQUENCE_NAME: &str = "VehicleBehaviorSequence";

/// A single vehicle driving open-loop at constant speed.
#[derive(Debug)]
pub struct OpenLoopScenario<'m, M: MapQuery + ?Sized> {
    base: BasicScenario,
    map: &'m M,
    params: OpenLoopParams,
    vehicle: Option<Actor>,
    spawn_transform: Option<Transform>,
}

impl<'m, M: MapQuery + ?Sized> OpenLoopScenario<'m, M> {
    pub const NAME: &'static str = "OpenLoopScenario";

    /// Builds the scenario and spawns its vehicle.
    ///
    /// When `params.clear_existing_vehicles` is set, every vehicle already
    /// in the world is removed first, ego vehicles included.
    pub fn new<R: Rng + ?Sized>(
        map: &'m M,
        provider: &mut dyn ActorProvider,
        rng: &mut R,
        ego_vehicles: Vec<Actor>,
        config: ScenarioConfiguration,
        params: OpenLoopParams,
        options: ScenarioOptions,
    ) -> ScenarioResult<Self> {
        if params.clear_existing_vehicles {
            clear_vehicles(provider)?;
        }

        let base = BasicScenario::new(Self::NAME, ego_vehicles, config, options, params.timeout);
        let mut scenario = Self {
            base,
            map,
            params,
            vehicle: None,
            spawn_transform: None,
        };
        scenario.initialize_actors(provider, rng)?;
        Ok(scenario)
    }

    fn initialize_actors<R: Rng + ?Sized>(
        &mut self,
        provider: &mut dyn ActorProvider,
        rng: &mut R,
    ) -> ScenarioResult<()> {
        let spawn_points = self.map.spawn_points();
        if self.base.options.debug_mode {
            for (index, point) in spawn_points.iter().enumerate() {
                debug!(index, location = %point.location, rotation = %point.rotation, "spawn point");
            }
        }

        let spawn_point = spawn_points
            .choose(rng)
            .copied()
            .ok_or_else(|| ScenarioError::NoSpawnPoints {
                map: self.map.name().to_string(),
            })?;
        let transform = spawn_point.raised(self.params.spawn_z_offset);

        let vehicle = spawn_with_fallback(
            provider,
            &self.params.preferred_model,
            &self.params.fallback_model,
            &transform,
        )?;
        info!(
            scenario = %self.base.name,
            actor = %vehicle.id,
            model = %vehicle.type_id,
            at = %transform,
            "vehicle spawned"
        );

        self.base.other_actors.push(vehicle.clone());
        self.vehicle = Some(vehicle);
        self.spawn_transform = Some(transform);
        Ok(())
    }

    /// The vehicle, until teardown clears it.
    #[must_use]
    pub const fn vehicle(&self) -> Option<&Actor> {
        self.vehicle.as_ref()
    }

    /// Transform the vehicle was requested at (spawn point plus z offset).
    #[must_use]
    pub const fn spawn_transform(&self) -> Option<Transform> {
        self.spawn_transform
    }

    #[must_use]
    pub const fn params(&self) -> &OpenLoopParams {
        &self.params
    }

    #[must_use]
    pub fn vehicle_speed(&self) -> f64 {
        self.params.vehicle_speed
    }

    #[must_use]
    pub const fn map(&self) -> &'m M {
        self.map
    }
}

impl<M: MapQuery + ?Sized> Scenario for OpenLoopScenario<'_, M> {
    fn base(&self) -> &BasicScenario {
        &self.base
    }

    fn create_behavior(&self, provider: &dyn ActorProvider) -> ScenarioResult<Sequence> {
        let vehicle = self.vehicle.as_ref().ok_or(ScenarioError::VehicleMissing)?;
        let current = provider.actor_transform(vehicle.id)?;

        let mut behavior = Sequence::new(BEHAVIOR_SEQUENCE_NAME);
        // registers the starting pose with the engine
        behavior.add_child(ActorTransformSetter::new(vehicle.id, current));
        behavior.add_child(KeepVelocity::new(vehicle.id, self.params.vehicle_speed));
        behavior.add_child(ActorDestroy::new(vehicle.id));
        Ok(behavior)
    }

    fn create_test_criteria(&self) -> ScenarioResult<Vec<Criterion>> {
        let vehicle = self.vehicle.as_ref().ok_or(ScenarioError::VehicleMissing)?;
        Ok(vec![CollisionTest::new(vehicle.id).into()])
    }

    fn remove_all_actors(&mut self, provider: &mut dyn ActorProvider) -> ScenarioResult<()> {
        let base_result = self.base.remove_all_actors(provider);

        // The behavior's destroy step or the base teardown may already
        // have removed the vehicle.
        let vehicle_result = match self.vehicle.take() {
            Some(vehicle) => match provider.remove_actor_by_id(vehicle.id) {
                Ok(()) => {
                    debug!(actor = %vehicle.id, "vehicle removed");
                    Ok(())
                }
                Err(err) if err.is_unknown_actor() => {
                    debug!(actor = %vehicle.id, "vehicle already removed");
                    Ok(())
                }
                Err(err) => Err(err.into()),
            },
            None => Ok(()),
        };
        base_result.and(vehicle_result)
    }
}

/// Spawn points of `map`, numbered in map order.
pub fn list_spawn_points<M: MapQuery + ?Sized>(map: &M) -> Vec<(usize, Transform)> {
    map.spawn_points().into_iter().enumerate().collect()
}

/// Requests `preferred` at `transform`, retrying exactly once with `fallback`.
pub fn spawn_with_fallback(
    provider: &mut dyn ActorProvider,
    preferred: &str,
    fallback: &str,
    transform: &Transform,
) -> ScenarioResult<Actor> {
    match provider.request_new_actor(preferred, transform) {
        Ok(actor) => Ok(actor),
        Err(preferred_err) => {
            warn!(
                model = preferred,
                at = %transform,
                error = %preferred_err,
                fallback,
                "spawn failed, trying fallback model"
            );
            provider
                .request_new_actor(fallback, transform)
                .map_err(|fallback_err| ScenarioError::Spawn {
                    preferred: preferred_err,
                    fallback: fallback_err,
                })
        }
    }
}

/// Removes every vehicle in the world. Returns how many went.
pub fn clear_vehicles(provider: &mut dyn ActorProvider) -> ScenarioResult<usize> {
    let mut removed = 0;
    for actor in provider.actors() {
        if !actor.is_vehicle() {
            continue;
        }
        match provider.remove_actor_by_id(actor.id) {
            Ok(()) => removed += 1,
            Err(SimError::UnknownActor { .. }) => {}
            Err(err) => return Err(err.into()),
        }
    }
    if removed > 0 {
        debug!(removed, "cleared existing vehicles");
    }
    Ok(removed)
}
