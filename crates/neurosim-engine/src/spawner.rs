//! Grid dressing and initial population for a simulation run.
//!
//! Before the first tick the engine scatters terrain over the freshly built
//! grid and seeds the population. Each species spawns in its own zone:
//! herbivores in the lower band, carnivores in the upper band, scavengers
//! anywhere. Scavengers get a boid at their node's coordinate so they take
//! part in flocking from the first tick.

use neurosim_agents::Agent;
use neurosim_core::SimContext;
use neurosim_core::config::{FlockingConfig, PopulationConfig, TerrainConfig};
use neurosim_types::{GridCell, Species, TerrainKind, Vec2};
use neurosim_world::Graph;
use rand::Rng;
use tracing::{debug, info, warn};

use crate::error::EngineError;

/// Random draws per agent before giving up on finding an open cell.
const MAX_PLACEMENT_ATTEMPTS: u32 = 32;

/// Region of the grid a species spawns in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnZone {
    /// Rows `[1, max_y / 4)`.
    LowerBand,
    /// Rows `[3 * max_y / 4, max_y)`.
    UpperBand,
    /// Any cell.
    Anywhere,
}

impl SpawnZone {
    /// Zone in which `species` spawns.
    pub const fn for_species(species: Species) -> Self {
        match species {
            Species::Herbivore => Self::LowerBand,
            Species::Carnivore => Self::UpperBand,
            Species::Scavenger => Self::Anywhere,
        }
    }
}

/// Outcome of seeding the population.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpawnSummary {
    /// Agents placed, per species in [`Species::ALL`] order.
    pub spawned: [u32; Species::COUNT],
    /// Agents dropped because their zone had no open cell.
    pub skipped: u32,
}

impl SpawnSummary {
    /// Total agents placed.
    pub fn total(&self) -> u32 {
        self.spawned.iter().fold(0, |sum, n| sum.saturating_add(*n))
    }
}

/// Assign terrain to every node by the configured densities.
///
/// Each node draws once: blocked first, then bush, then carrion, leaving
/// the rest empty.
pub fn scatter_terrain<R: Rng + ?Sized>(graph: &mut Graph, terrain: &TerrainConfig, rng: &mut R) {
    let blocked_until = terrain.blocked_density;
    let bush_until = blocked_until + terrain.bush_density;
    let carrion_until = bush_until + terrain.carrion_density;

    for node in graph.nodes_mut() {
        let roll: f64 = rng.random();
        let kind = if roll < blocked_until {
            TerrainKind::Blocked
        } else if roll < bush_until {
            TerrainKind::Bush
        } else if roll < carrion_until {
            TerrainKind::Carrion
        } else {
            TerrainKind::Empty
        };
        node.set_terrain(kind);
    }

    info!(
        bushes = graph.count_of(TerrainKind::Bush),
        blocked = graph.count_of(TerrainKind::Blocked),
        carrion = graph.count_of(TerrainKind::Carrion),
        "Terrain scattered"
    );
}

/// Spawn the initial population into `ctx`.
///
/// # Errors
///
/// Returns [`EngineError::Core`] if the registry rejects an agent.
pub fn spawn_population(
    ctx: &mut SimContext,
    population: &PopulationConfig,
    flocking: &FlockingConfig,
) -> Result<SpawnSummary, EngineError> {
    let mut summary = SpawnSummary::default();

    for species in Species::ALL {
        let count = match species {
            Species::Herbivore => population.herbivores,
            Species::Carnivore => population.carnivores,
            Species::Scavenger => population.scavengers,
        };
        let zone = SpawnZone::for_species(species);

        for _ in 0..count {
            let Some(cell) = find_open_cell(ctx, zone) else {
                warn!(%species, ?zone, "No open cell found, agent not spawned");
                summary.skipped = summary.skipped.saturating_add(1);
                continue;
            };

            let agent = if species.is_flocking() {
                let position: Vec2 = cell.to_coordinate();
                Agent::new(species, cell).with_boid(position, flocking.detection_radius)
            } else {
                Agent::new(species, cell)
            };
            let handle = ctx.spawn(agent)?;
            debug!(agent = %handle.id(), %species, %cell, "Spawned agent");

            if let Some(placed) = summary.spawned.get_mut(species.index()) {
                *placed = placed.saturating_add(1);
            }
        }
    }

    Ok(summary)
}

/// Draw cells from `zone` until one is not blocked.
fn find_open_cell(ctx: &mut SimContext, zone: SpawnZone) -> Option<GridCell> {
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let node = match zone {
            SpawnZone::LowerBand => ctx.random_node_in_lower_band(),
            SpawnZone::UpperBand => ctx.random_node_in_upper_band(),
            SpawnZone::Anywhere => ctx.random_node(),
        }?;
        if !node.is_blocked() {
            return Some(node.cell());
        }
    }
    None
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------
