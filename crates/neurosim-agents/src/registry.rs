//! The registry of live agents.
//!
//! The [`AgentRegistry`] maps agent IDs to shared agent handles. The
//! lifecycle collaborator inserts agents at spawn and removes them at death,
//! between ticks; during a tick the registry is only read. Handles are
//! [`Arc`]s so the per-tick update loop can hold agents alongside the
//! registry.

use std::collections::BTreeMap;
use std::sync::Arc;

use neurosim_types::{AgentId, Coordinate, GridCell, Species, Vec2};
use neurosim_world::nearest_by;

use crate::agent::Agent;
use crate::error::AgentError;

/// Live agents keyed by ID.
///
/// Iteration is in ID order. Nearest-agent queries scan in that order, so
/// among equidistant agents the one with the smallest ID wins.
#[derive(Debug, Clone)]
pub struct AgentRegistry<C = Vec2> {
    /// All live agents.
    agents: BTreeMap<AgentId, Arc<Agent<C>>>,
}

impl<C: Coordinate> AgentRegistry<C> {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self {
            agents: BTreeMap::new(),
        }
    }

    // -------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------

    /// Register a newly spawned agent and return its shared handle.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::DuplicateAgent`] if the ID is already taken.
    pub fn insert(&mut self, agent: Agent<C>) -> Result<Arc<Agent<C>>, AgentError> {
        let id = agent.id();
        if self.agents.contains_key(&id) {
            return Err(AgentError::DuplicateAgent(id));
        }
        let handle = Arc::new(agent);
        self.agents.insert(id, Arc::clone(&handle));
        tracing::debug!(agent = %id, species = %handle.species(), "Agent registered");
        Ok(handle)
    }

    /// Remove a dead agent and return its handle.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::AgentNotFound`] if no such agent is registered.
    pub fn remove(&mut self, id: AgentId) -> Result<Arc<Agent<C>>, AgentError> {
        let removed = self.agents.remove(&id).ok_or(AgentError::AgentNotFound(id))?;
        tracing::debug!(agent = %id, species = %removed.species(), "Agent removed");
        Ok(removed)
    }

    /// Apply `update` to a registered agent.
    ///
    /// If the tick loop still holds a clone of the handle, the registry
    /// entry is copied before the update and the outstanding handle keeps
    /// the old state.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::AgentNotFound`] if no such agent is registered.
    pub fn update<F>(&mut self, id: AgentId, update: F) -> Result<(), AgentError>
    where
        F: FnOnce(&mut Agent<C>),
    {
        let handle = self.agents.get_mut(&id).ok_or(AgentError::AgentNotFound(id))?;
        update(Arc::make_mut(handle));
        Ok(())
    }

    /// Move an agent to another cell.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::AgentNotFound`] if no such agent is registered.
    pub fn relocate(&mut self, id: AgentId, node: GridCell) -> Result<(), AgentError> {
        self.update(id, |agent| agent.relocate(node))
    }

    /// Move an agent's boid.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::AgentNotFound`] if no such agent is registered,
    /// or [`AgentError::MissingBoid`] if it carries no boid.
    pub fn move_boid(&mut self, id: AgentId, position: C) -> Result<(), AgentError> {
        let mut moved = false;
        self.update(id, |agent| moved = agent.set_boid_position(position))?;
        if moved {
            Ok(())
        } else {
            Err(AgentError::MissingBoid(id))
        }
    }

    // -------------------------------------------------------------------
    // Lookup
    // -------------------------------------------------------------------

    /// Get the handle of a registered agent.
    pub fn get(&self, id: AgentId) -> Option<&Arc<Agent<C>>> {
        self.agents.get(&id)
    }

    /// Whether an agent with this ID is registered.
    pub fn contains(&self, id: AgentId) -> bool {
        self.agents.contains_key(&id)
    }

    /// Number of live agents.
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Iterate over all live agents in ID order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Agent<C>>> {
        self.agents.values()
    }

    /// Iterate over live agents of one species.
    pub fn of_species(&self, species: Species) -> impl Iterator<Item = &Arc<Agent<C>>> {
        self.agents.values().filter(move |a| a.species() == species)
    }

    /// Number of live agents of one species.
    pub fn count_of(&self, species: Species) -> usize {
        self.of_species(species).count()
    }

    /// Iterate over agents that take part in flocking: flocking species
    /// carrying a boid.
    pub fn flocking_agents(&self) -> impl Iterator<Item = &Arc<Agent<C>>> {
        self.agents.values().filter(|a| a.is_flocking())
    }

    /// Number of agents that take part in flocking.
    pub fn flocking_count(&self) -> usize {
        self.flocking_agents().count()
    }

    /// Raw map access for the parallel flocking scan.
    pub(crate) const fn entries(&self) -> &BTreeMap<AgentId, Arc<Agent<C>>> {
        &self.agents
    }

    // -------------------------------------------------------------------
    // Spatial
    // -------------------------------------------------------------------

    /// Find the agent of `species` whose current cell is closest to
    /// `position`.
    ///
    /// Scans every agent in ID order; on equal distance the earlier agent
    /// wins. Returns `None` when no agent of that species is alive.
    pub fn nearest_agent_of_type(
        &self,
        species: Species,
        position: C,
    ) -> Option<&Arc<Agent<C>>> {
        let nearest = nearest_by(self.of_species(species), position, |agent| {
            agent.node_coordinate()
        });
        tracing::trace!(
            %species,
            found = ?nearest.map(|a| a.id()),
            "Nearest agent query"
        );
        nearest
    }
}

impl<C: Coordinate> Default for AgentRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn agent_at(species: Species, x: u32, y: u32) -> Agent {
        Agent::new(species, GridCell::new(x, y))
    }

    #[test]
    fn insert_and_remove() {
        let mut registry = AgentRegistry::new();
        let agent = agent_at(Species::Herbivore, 1, 1);
        let id = agent.id();

        assert!(registry.insert(agent).is_ok());
        assert_eq!(registry.len(), 1);
        assert!(registry.contains(id));

        let removed = registry.remove(id);
        assert_eq!(removed.map(|a| a.id()), Ok(id));
        assert!(registry.is_empty());
    }

    #[test]
    fn duplicate_id_rejected() {
        let mut registry = AgentRegistry::new();
        let id = AgentId::new();
        let first: Agent = Agent::with_id(id, Species::Carnivore, GridCell::new(0, 0));
        let second: Agent = Agent::with_id(id, Species::Herbivore, GridCell::new(1, 0));

        assert!(registry.insert(first).is_ok());
        assert_eq!(
            registry.insert(second).map(|a| a.id()),
            Err(AgentError::DuplicateAgent(id))
        );
        assert_eq!(registry.get(id).map(|a| a.species()), Some(Species::Carnivore));
    }

    #[test]
    fn remove_unknown_agent_fails() {
        let mut registry: AgentRegistry = AgentRegistry::new();
        let id = AgentId::new();
        assert_eq!(
            registry.remove(id).map(|a| a.id()),
            Err(AgentError::AgentNotFound(id))
        );
    }

    #[test]
    fn nearest_agent_filters_species() {
        let mut registry = AgentRegistry::new();
        let carnivore = agent_at(Species::Carnivore, 2, 2);
        let carnivore_id = carnivore.id();
        assert!(registry.insert(carnivore).is_ok());
        assert!(registry.insert(agent_at(Species::Herbivore, 8, 8)).is_ok());

        let found = registry.nearest_agent_of_type(Species::Carnivore, Vec2::new(0.0, 0.0));
        assert_eq!(found.map(|a| a.id()), Some(carnivore_id));

        let herbivore = registry.nearest_agent_of_type(Species::Herbivore, Vec2::new(0.0, 0.0));
        assert_eq!(herbivore.map(|a| a.node()), Some(GridCell::new(8, 8)));
    }

    #[test]
    fn nearest_agent_none_when_species_absent() {
        let mut registry = AgentRegistry::new();
        assert!(registry.insert(agent_at(Species::Herbivore, 3, 3)).is_ok());
        assert!(registry
            .nearest_agent_of_type(Species::Scavenger, Vec2::new(0.0, 0.0))
            .is_none());
    }

    #[test]
    fn nearest_agent_picks_closest() {
        let mut registry = AgentRegistry::new();
        let near = agent_at(Species::Herbivore, 4, 5);
        let near_id = near.id();
        assert!(registry.insert(agent_at(Species::Herbivore, 9, 9)).is_ok());
        assert!(registry.insert(near).is_ok());
        assert!(registry.insert(agent_at(Species::Herbivore, 0, 0)).is_ok());

        let found = registry.nearest_agent_of_type(Species::Herbivore, Vec2::new(5.0, 5.0));
        assert_eq!(found.map(|a| a.id()), Some(near_id));
    }

    #[test]
    fn nearest_agent_tie_goes_to_smallest_id() {
        let mut registry = AgentRegistry::new();
        let a = agent_at(Species::Carnivore, 3, 5);
        let b = agent_at(Species::Carnivore, 7, 5);
        let first = core::cmp::min(a.id(), b.id());
        assert!(registry.insert(b).is_ok());
        assert!(registry.insert(a).is_ok());

        let found = registry.nearest_agent_of_type(Species::Carnivore, Vec2::new(5.0, 5.0));
        assert_eq!(found.map(|agent| agent.id()), Some(first));
    }

    #[test]
    fn relocate_updates_registry_but_not_outstanding_handles() {
        let mut registry = AgentRegistry::new();
        let held = registry.insert(agent_at(Species::Herbivore, 1, 1)).unwrap();

        assert!(registry.relocate(held.id(), GridCell::new(6, 6)).is_ok());
        assert_eq!(registry.get(held.id()).map(|a| a.node()), Some(GridCell::new(6, 6)));
        assert_eq!(held.node(), GridCell::new(1, 1));
    }

    #[test]
    fn move_boid_requires_boid() {
        let mut registry = AgentRegistry::new();
        let plain = agent_at(Species::Scavenger, 0, 0);
        let plain_id = plain.id();
        let flocker = agent_at(Species::Scavenger, 0, 0).with_boid(Vec2::new(0.0, 0.0), 2.0);
        let flocker_id = flocker.id();
        assert!(registry.insert(plain).is_ok());
        assert!(registry.insert(flocker).is_ok());

        assert_eq!(
            registry.move_boid(plain_id, Vec2::new(1.0, 1.0)),
            Err(AgentError::MissingBoid(plain_id))
        );
        assert!(registry.move_boid(flocker_id, Vec2::new(1.0, 1.0)).is_ok());
        assert_eq!(
            registry
                .get(flocker_id)
                .and_then(|a| a.boid().map(|b| b.position())),
            Some(Vec2::new(1.0, 1.0))
        );
    }

    #[test]
    fn flocking_view_requires_species_and_boid() {
        let mut registry = AgentRegistry::new();
        assert!(registry
            .insert(agent_at(Species::Scavenger, 0, 0).with_boid(Vec2::new(0.0, 0.0), 1.0))
            .is_ok());
        assert!(registry.insert(agent_at(Species::Scavenger, 1, 0)).is_ok());
        assert!(registry
            .insert(agent_at(Species::Herbivore, 2, 0).with_boid(Vec2::new(2.0, 0.0), 1.0))
            .is_ok());

        assert_eq!(registry.count_of(Species::Scavenger), 2);
        assert_eq!(registry.flocking_count(), 1);
    }
}
