use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use openloop_cli::{format_spawn_points, load_map, load_params, plan_open_loop, DryRunProvider};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use scenario::ScenarioOptions;
use sim::{Actor, Transform};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "openloop",
    version,
    about = "Open-loop vehicle scenario planning tools"
)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every spawn point of a map.
    SpawnPoints {
        /// Map JSON (name plus spawn points).
        map: PathBuf,
    },
    /// Build the scenario against an in-memory registry and print its plan.
    Plan {
        /// Map JSON (name plus spawn points).
        map: PathBuf,
        /// Optional scenario parameters JSON; missing fields use defaults.
        #[arg(long)]
        params: Option<PathBuf>,
        /// RNG seed for spawn point selection.
        #[arg(long, default_value_t = 1)]
        seed: u64,
        /// Blueprints the registry should refuse to spawn.
        #[arg(long = "unavailable", value_name = "MODEL")]
        unavailable: Vec<String>,
        /// Vehicles already parked in the world, as blueprint ids.
        #[arg(long = "parked", value_name = "MODEL")]
        parked: Vec<String>,
        /// Do not attach evaluation criteria.
        #[arg(long)]
        no_criteria: bool,
        /// Log every spawn point considered.
        #[arg(long)]
        debug: bool,
        /// Write the plan here instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::SpawnPoints { map } => {
            let map = load_map(&map).context("load map")?;
            println!("Available Spawn Points:");
            for line in format_spawn_points(&map) {
                println!("{line}");
            }
        }
        Command::Plan {
            map,
            params,
            seed,
            unavailable,
            parked,
            no_criteria,
            debug,
            out,
        } => {
            let map = load_map(&map).context("load map")?;
            let params = params
                .as_deref()
                .map(load_params)
                .transpose()
                .context("load params")?
                .unwrap_or_default();
            let options = ScenarioOptions {
                debug_mode: debug,
                criteria_enable: !no_criteria,
                ..ScenarioOptions::default()
            };

            let mut provider = DryRunProvider::new().with_unavailable(unavailable);
            let parked: Vec<Actor> = parked
                .iter()
                .map(|model| provider.preload(model, Transform::default()))
                .collect();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);

            let plan = plan_open_loop(&map, &mut provider, &mut rng, params, options)?;
            if !parked.is_empty() {
                info!(
                    parked = parked.len(),
                    left = provider.live_count(),
                    "parked vehicles handled"
                );
            }

            let contents = serde_json::to_string_pretty(&plan).context("serialize plan")?;
            match out {
                Some(path) => fs::write(&path, contents)
                    .with_context(|| format!("write {}", path.display()))?,
                None => println!("{contents}"),
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
