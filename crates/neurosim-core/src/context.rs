//! The simulation context.
//!
//! [`SimContext`] owns everything that lives for the whole run: the
//! navigation graph, the agent registry, both brain tables, and the seeded
//! random generator. It is built once by [`SimContext::bootstrap`] and then
//! passed by reference to whatever needs it. There is no global state.
//!
//! # Tick discipline
//!
//! Queries take `&self` and may run concurrently during a tick. Lifecycle
//! operations (`spawn`, `despawn`, `relocate`, `move_boid`, `graph_mut`)
//! take `&mut self` and run between ticks. Random draws also take
//! `&mut self` since they advance the generator.

use std::collections::BTreeMap;
use std::sync::Arc;

use neurosim_agents::{Agent, AgentRegistry, Boid};
use neurosim_types::{AgentId, BrainRole, BrainShape, GridCell, Species, TerrainKind, Transform, Vec2};
use neurosim_world::{Graph, Node, WorldError};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rayon::prelude::*;

use crate::brain::{BrainError, BrainRoleTable, BrainTopologyTable};
use crate::error::CoreError;

/// Long-lived simulation state shared by every subsystem.
#[derive(Debug)]
pub struct SimContext {
    /// Navigation graph.
    graph: Graph,
    /// Live agents.
    agents: AgentRegistry,
    /// Network shape per `(species, role)`.
    topology: BrainTopologyTable,
    /// Brain slot order per species.
    roles: BrainRoleTable,
    /// Seeded generator for every random draw.
    rng: SmallRng,
}

impl SimContext {
    /// Build the context around `graph` with the standard brain tables.
    ///
    /// Startup steps:
    ///
    /// 1. Initialise the topology table.
    /// 2. Load the standard role table.
    /// 3. Verify every role slot has a topology entry.
    /// 4. Seed the random generator.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Brain`] if a role has no registered topology.
    pub fn bootstrap(graph: Graph, seed: u64) -> Result<Self, CoreError> {
        Self::with_tables(
            graph,
            BrainTopologyTable::standard(),
            BrainRoleTable::standard(),
            seed,
        )
    }

    /// Build the context with caller-supplied brain tables.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Brain`] if a role in `roles` has no entry in
    /// `topology`.
    pub fn with_tables(
        graph: Graph,
        topology: BrainTopologyTable,
        roles: BrainRoleTable,
        seed: u64,
    ) -> Result<Self, CoreError> {
        check_brain_tables(&topology, &roles)?;
        tracing::info!(
            max_x = graph.max_x(),
            max_y = graph.max_y(),
            topologies = topology.len(),
            seed,
            "Simulation context ready"
        );
        Ok(Self {
            graph,
            agents: AgentRegistry::new(),
            topology,
            roles,
            rng: SmallRng::seed_from_u64(seed),
        })
    }

    // -------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------

    /// The navigation graph.
    pub const fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Mutable graph access for between-tick terrain changes.
    pub const fn graph_mut(&mut self) -> &mut Graph {
        &mut self.graph
    }

    /// The agent registry.
    pub const fn agents(&self) -> &AgentRegistry {
        &self.agents
    }

    /// The brain topology table.
    pub const fn topology(&self) -> &BrainTopologyTable {
        &self.topology
    }

    /// The brain role table.
    pub const fn roles(&self) -> &BrainRoleTable {
        &self.roles
    }

    // -------------------------------------------------------------------
    // Brains
    // -------------------------------------------------------------------

    /// Re-run topology initialisation and re-check the tables.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Brain`] if a role has no registered topology.
    pub fn reinit_topology(&mut self) -> Result<(), CoreError> {
        self.topology.init();
        check_brain_tables(&self.topology, &self.roles)?;
        Ok(())
    }

    /// Shape of the `role` brain for `species`.
    ///
    /// # Errors
    ///
    /// Returns [`BrainError::TopologyNotFound`] if the pair is unregistered.
    pub fn lookup(&self, role: BrainRole, species: Species) -> Result<&BrainShape, BrainError> {
        self.topology.lookup(role, species)
    }

    /// Slot of the `role` brain in `species`' brain list.
    ///
    /// # Errors
    ///
    /// Returns [`BrainError::RoleNotFound`] if the species has no such role.
    pub fn resolve_slot(&self, role: BrainRole, species: Species) -> Result<usize, BrainError> {
        self.roles.resolve_slot(role, species)
    }

    /// Slot of the `role` brain for a raw species tag.
    ///
    /// # Errors
    ///
    /// Returns [`BrainError::InvalidSpecies`] for an unknown tag, or
    /// [`BrainError::RoleNotFound`] if the species has no such role.
    pub fn resolve_slot_tagged(&self, role: BrainRole, tag: u8) -> Result<usize, BrainError> {
        self.roles.resolve_slot_tagged(role, tag)
    }

    /// Shapes of all of `species`' brains in slot order.
    ///
    /// # Errors
    ///
    /// Returns [`BrainError::TopologyNotFound`] if a slot has no shape.
    pub fn brain_shapes(&self, species: Species) -> Result<Vec<&BrainShape>, BrainError> {
        self.roles
            .roles(species)
            .iter()
            .map(|role| self.topology.lookup(*role, species))
            .collect()
    }

    // -------------------------------------------------------------------
    // Spatial queries
    // -------------------------------------------------------------------

    /// Node whose cell contains `position`.
    pub fn coordinate_to_node(&self, position: Vec2) -> Option<&Node> {
        self.graph.coordinate_to_node(position)
    }

    /// Closest node with the given terrain.
    pub fn nearest_node_of_type(&self, terrain: TerrainKind, position: Vec2) -> Option<&Node> {
        self.graph.nearest_node_of_type(terrain, position)
    }

    /// Closest live agent of the given species.
    pub fn nearest_agent_of_type(&self, species: Species, position: Vec2) -> Option<&Arc<Agent>> {
        self.agents.nearest_agent_of_type(species, position)
    }

    /// A uniformly random node.
    pub fn random_node(&mut self) -> Option<&Node> {
        self.graph.random_node(&mut self.rng)
    }

    /// A random node from the lower spawn band.
    pub fn random_node_in_lower_band(&mut self) -> Option<&Node> {
        self.graph.random_node_in_lower_band(&mut self.rng)
    }

    /// A random node from the upper spawn band.
    pub fn random_node_in_upper_band(&mut self) -> Option<&Node> {
        self.graph.random_node_in_upper_band(&mut self.rng)
    }

    /// Transforms of all flocking agents within `boid`'s detection radius.
    pub fn neighbors_within_radius(&self, boid: &Boid) -> Vec<Transform> {
        self.agents.neighbors_within_radius(boid)
    }

    /// Run the neighbour query for every flocking agent.
    ///
    /// Agents are processed in parallel. Each entry maps a flocking agent to
    /// the transforms of its neighbours, in no particular order.
    pub fn flocking_pass(&self) -> BTreeMap<AgentId, Vec<Transform>> {
        let boids: Vec<Boid> = self
            .agents
            .flocking_agents()
            .filter_map(|agent| agent.boid().copied())
            .collect();
        let neighbors: BTreeMap<AgentId, Vec<Transform>> = boids
            .par_iter()
            .map(|boid| (boid.owner, self.agents.neighbors_within_radius(boid)))
            .collect();
        tracing::debug!(flockers = neighbors.len(), "Flocking pass complete");
        neighbors
    }

    // -------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------

    /// Register a new agent.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::World`] if the agent's cell is off the grid, or
    /// [`CoreError::Agent`] if its ID is already registered.
    pub fn spawn(&mut self, agent: Agent) -> Result<Arc<Agent>, CoreError> {
        self.check_cell(agent.node())?;
        let handle = self.agents.insert(agent)?;
        Ok(handle)
    }

    /// Remove a dead agent.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Agent`] if no such agent is registered.
    pub fn despawn(&mut self, id: AgentId) -> Result<Arc<Agent>, CoreError> {
        Ok(self.agents.remove(id)?)
    }

    /// Move an agent to another cell.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::World`] if `cell` is off the grid, or
    /// [`CoreError::Agent`] if no such agent is registered.
    pub fn relocate(&mut self, id: AgentId, cell: GridCell) -> Result<(), CoreError> {
        self.check_cell(cell)?;
        self.agents.relocate(id, cell)?;
        Ok(())
    }

    /// Move an agent's boid.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Agent`] if the agent is unknown or has no boid.
    pub fn move_boid(&mut self, id: AgentId, position: Vec2) -> Result<(), CoreError> {
        self.agents.move_boid(id, position)?;
        Ok(())
    }

    fn check_cell(&self, cell: GridCell) -> Result<(), WorldError> {
        if self.graph.contains(cell) {
            Ok(())
        } else {
            Err(WorldError::CellOutOfBounds {
                cell,
                max_x: self.graph.max_x(),
                max_y: self.graph.max_y(),
            })
        }
    }
}

/// Every role in every species' slot list must have a topology entry.
fn check_brain_tables(
    topology: &BrainTopologyTable,
    roles: &BrainRoleTable,
) -> Result<(), BrainError> {
    for (species, species_roles) in roles.iter() {
        for role in species_roles {
            topology.lookup(*role, species)?;
        }
    }
    Ok(())
}
