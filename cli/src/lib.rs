//! Dry-run tooling for openloop scenarios.
//!
//! - Load a map description (name plus spawn points) from JSON
//! - List its spawn points
//! - Build the open-loop scenario against an in-memory registry and report
//!   the behavior and criteria a real engine would receive

mod dry_run;

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use atomics::{Criterion, Sequence};
use rand::Rng;
use scenario::{
    list_spawn_points, OpenLoopParams, OpenLoopScenario, Scenario, ScenarioConfiguration,
    ScenarioOptions,
};
use serde::{Deserialize, Serialize};
use sim::{Actor, MapQuery, Transform};
use tracing::info;

pub use dry_run::DryRunProvider;

/// Map description read from disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapFile {
    pub name: String,
    pub spawn_points: Vec<Transform>,
}

impl MapQuery for MapFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn spawn_points(&self) -> Vec<Transform> {
        self.spawn_points.clone()
    }
}

pub fn load_map(path: &Path) -> Result<MapFile> {
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("parse map {}", path.display()))
}

pub fn load_params(path: &Path) -> Result<OpenLoopParams> {
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("parse params {}", path.display()))
}

/// One line per spawn point, in map order.
#[must_use]
pub fn format_spawn_points(map: &MapFile) -> Vec<String> {
    list_spawn_points(map)
        .into_iter()
        .map(|(i, point)| {
            format!(
                "Spawn Point {i}: Location = {}, Rotation = {}",
                point.location, point.rotation
            )
        })
        .collect()
}

/// What the scenario handed over, plus what teardown did.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioPlan {
    pub scenario: String,
    pub config: String,
    pub map: String,
    pub vehicle: Actor,
    pub spawn_transform: Transform,
    pub timeout_secs: f64,
    pub behavior: Sequence,
    pub criteria: Vec<Criterion>,
    pub removed_on_teardown: usize,
}

/// Builds the open-loop scenario on `provider`, captures its plan, and tears
/// it down again.
pub fn plan_open_loop<R: Rng + ?Sized>(
    map: &MapFile,
    provider: &mut DryRunProvider,
    rng: &mut R,
    params: OpenLoopParams,
    options: ScenarioOptions,
) -> Result<ScenarioPlan> {
    let config = ScenarioConfiguration {
        name: format!("{}_dry_run", OpenLoopScenario::<MapFile>::NAME),
        town: Some(map.name.clone()),
        trigger_points: Vec::new(),
    };
    let mut scenario = OpenLoopScenario::new(
        map,
        provider,
        rng,
        Vec::new(),
        config,
        params,
        options,
    )
    .context("build scenario")?;

    let behavior = scenario
        .create_behavior(&*provider)
        .context("create behavior")?;
    let criteria = scenario.criteria().context("create criteria")?;
    let vehicle = scenario
        .vehicle()
        .cloned()
        .context("scenario has no vehicle")?;
    let spawn_transform = scenario
        .spawn_transform()
        .context("scenario has no spawn transform")?;
    info!(
        actor = %vehicle.id,
        steps = behavior.len(),
        criteria = criteria.len(),
        "scenario planned"
    );

    let removals_before = provider.removals();
    scenario
        .remove_all_actors(provider)
        .context("tear down scenario")?;

    Ok(ScenarioPlan {
        scenario: scenario.name().to_string(),
        config: scenario.base().config.name.clone(),
        map: map.name.clone(),
        vehicle,
        spawn_transform,
        timeout_secs: duration_secs(scenario.timeout()),
        behavior,
        criteria,
        removed_on_teardown: provider.removals() - removals_before,
    })
}

fn duration_secs(value: Duration) -> f64 {
    value.as_secs_f64()
}
