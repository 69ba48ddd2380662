//! Engine binary for the Neurosim simulation.
//!
//! This is the main entry point that stands in for the collaborators the
//! core crates expect: it builds the navigation grid, dresses it with
//! terrain, seeds the population, and drives the per-tick flocking pass.
//! Brain inference and agent decision loops live elsewhere; each tick here
//! runs the neighbour queries the flocking brains would consume.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `neurosim-config.yaml`
//! 2. Initialize structured logging (tracing)
//! 3. Build the grid and scatter terrain
//! 4. Bootstrap the simulation context (brain tables, seeded generator)
//! 5. Spawn the initial population
//! 6. Run the configured number of ticks
//! 7. Log the result

mod error;
mod spawner;

use std::path::Path;

use neurosim_core::{SimContext, SimulationConfig};
use neurosim_world::Graph;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;

/// Configuration file looked up in the working directory.
const CONFIG_PATH: &str = "neurosim-config.yaml";

/// Application entry point for the engine.
///
/// # Errors
///
/// Returns an error if any initialization step fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration. Logging is not up yet, so the source is
    //    reported once the subscriber exists.
    let (config, from_file) = load_config()?;

    // 2. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    info!("neurosim-engine starting");
    info!(
        world_name = config.world.name,
        seed = config.world.seed,
        width = config.world.width,
        height = config.world.height,
        ticks = config.world.ticks,
        from_file,
        "Configuration loaded"
    );

    // 3. Build the grid and scatter terrain.
    let mut graph = Graph::grid(config.world.width, config.world.height)?;
    let mut terrain_rng = SmallRng::seed_from_u64(config.world.seed);
    spawner::scatter_terrain(&mut graph, &config.terrain, &mut terrain_rng);

    // 4. Bootstrap the context.
    let mut ctx = SimContext::bootstrap(graph, config.world.seed)?;

    // 5. Spawn the initial population.
    let summary = spawner::spawn_population(&mut ctx, &config.population, &config.flocking)?;
    info!(
        spawned = summary.total(),
        skipped = summary.skipped,
        flocking = ctx.agents().flocking_count(),
        "Initial population spawned"
    );

    // 6. Run the ticks.
    let mut neighbor_links: u64 = 0;
    for tick in 0..config.world.ticks {
        let pass = ctx.flocking_pass();
        let links = pass.values().fold(0_u64, |sum, neighbors| {
            sum.saturating_add(u64::try_from(neighbors.len()).unwrap_or(u64::MAX))
        });
        neighbor_links = neighbor_links.saturating_add(links);
        debug!(tick, flockers = pass.len(), links, "Tick complete");
    }

    // 7. Log the result.
    info!(
        total_ticks = config.world.ticks,
        neighbor_links,
        agents = ctx.agents().len(),
        "neurosim-engine shutdown complete"
    );

    Ok(())
}

/// Load the simulation configuration from `neurosim-config.yaml`.
///
/// Looks for the config file relative to the current working directory and
/// falls back to defaults when it is absent. The flag reports which source
/// was used.
fn load_config() -> Result<(SimulationConfig, bool), EngineError> {
    let config_path = Path::new(CONFIG_PATH);
    if config_path.exists() {
        let config = SimulationConfig::from_file(config_path)?;
        Ok((config, true))
    } else {
        Ok((SimulationConfig::default(), false))
    }
}
