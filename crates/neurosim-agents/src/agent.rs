//! Agents and their flocking descriptors.
//!
//! An [`Agent`] is identity plus location: its species, the graph cell it
//! occupies, and, for species that flock, a [`Boid`] carrying the continuous
//! position and detection radius that neighbours see.

use neurosim_types::{AgentId, Coordinate, GridCell, Species, Transform, Vec2};
use serde::{Deserialize, Serialize};

/// Flocking descriptor of an agent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Boid<C = Vec2> {
    /// Agent that owns this boid. Used to exclude the boid from its own
    /// neighbour queries.
    pub owner: AgentId,
    /// Current position.
    pub transform: Transform<C>,
    /// Radius within which other boids count as neighbours.
    pub detection_radius: f32,
}

impl<C: Coordinate> Boid<C> {
    /// Create a boid for `owner` at `position`.
    pub const fn new(owner: AgentId, position: C, detection_radius: f32) -> Self {
        Self {
            owner,
            transform: Transform::new(position),
            detection_radius,
        }
    }

    /// Current position.
    pub const fn position(&self) -> C {
        self.transform.position
    }

    /// Square of the detection radius.
    pub fn radius_squared(&self) -> f32 {
        self.detection_radius * self.detection_radius
    }
}

/// A live simulated agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent<C = Vec2> {
    /// Unique identifier, stable for the agent's lifetime.
    id: AgentId,
    /// Species tag.
    species: Species,
    /// Graph cell the agent currently occupies.
    node: GridCell,
    /// Flocking descriptor, present only for flocking agents.
    boid: Option<Boid<C>>,
}

impl<C: Coordinate> Agent<C> {
    /// Create an agent with a fresh ID at `node`.
    pub fn new(species: Species, node: GridCell) -> Self {
        Self::with_id(AgentId::new(), species, node)
    }

    /// Create an agent with a caller-chosen ID.
    pub const fn with_id(id: AgentId, species: Species, node: GridCell) -> Self {
        Self {
            id,
            species,
            node,
            boid: None,
        }
    }

    /// Attach a boid at `position` with the given detection radius.
    #[must_use]
    pub fn with_boid(mut self, position: C, detection_radius: f32) -> Self {
        self.boid = Some(Boid::new(self.id, position, detection_radius));
        self
    }

    /// Unique identifier.
    pub const fn id(&self) -> AgentId {
        self.id
    }

    /// Species tag.
    pub const fn species(&self) -> Species {
        self.species
    }

    /// Graph cell currently occupied.
    pub const fn node(&self) -> GridCell {
        self.node
    }

    /// Position of the occupied cell in coordinate type `C`.
    pub fn node_coordinate(&self) -> C {
        self.node.to_coordinate()
    }

    /// Flocking descriptor, if any.
    pub const fn boid(&self) -> Option<&Boid<C>> {
        self.boid.as_ref()
    }

    /// Move the agent to another cell.
    pub const fn relocate(&mut self, node: GridCell) {
        self.node = node;
    }

    /// Move the agent's boid. Returns `false` if the agent has no boid.
    pub fn set_boid_position(&mut self, position: C) -> bool {
        match self.boid.as_mut() {
            Some(boid) => {
                boid.transform.position = position;
                true
            }
            None => false,
        }
    }

    /// Whether this agent takes part in flocking queries.
    pub const fn is_flocking(&self) -> bool {
        self.species.is_flocking() && self.boid.is_some()
    }
}
