//! Dense grid graph: the spatial backbone of the simulation.
//!
//! The [`Graph`] stores every [`Node`] of a `max_x` by `max_y` grid in a
//! single vector. Nodes are laid out column-major (`index = x * max_y + y`),
//! and every scan in this crate walks them in that order, which fixes the
//! tie-break order of nearest-node queries.

use neurosim_types::{GridCell, TerrainKind};
use serde::{Deserialize, Serialize};

use crate::error::WorldError;
use crate::node::Node;

/// The navigation graph holding all nodes and the grid bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    /// Number of columns; valid `x` lies in `[0, max_x)`.
    max_x: u32,
    /// Number of rows; valid `y` lies in `[0, max_y)`.
    max_y: u32,
    /// All nodes, column-major.
    nodes: Vec<Node>,
}

impl Graph {
    /// Build a `max_x` by `max_y` grid of empty nodes with 4-neighbour
    /// adjacency.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::EmptyGrid`] if either dimension is zero, or
    /// [`WorldError::GridTooLarge`] if the node count overflows `usize`.
    pub fn grid(max_x: u32, max_y: u32) -> Result<Self, WorldError> {
        if max_x == 0 || max_y == 0 {
            return Err(WorldError::EmptyGrid { max_x, max_y });
        }
        let count = u64::from(max_x)
            .checked_mul(u64::from(max_y))
            .and_then(|n| usize::try_from(n).ok())
            .ok_or(WorldError::GridTooLarge { max_x, max_y })?;

        let mut nodes = Vec::with_capacity(count);
        for x in 0..max_x {
            for y in 0..max_y {
                let cell = GridCell::new(x, y);
                let mut node = Node::new(cell);
                node.set_neighbors(adjacent_cells(cell, max_x, max_y));
                nodes.push(node);
            }
        }

        tracing::debug!(max_x, max_y, node_count = nodes.len(), "Grid graph built");
        Ok(Self {
            max_x,
            max_y,
            nodes,
        })
    }

    /// Number of columns.
    pub const fn max_x(&self) -> u32 {
        self.max_x
    }

    /// Number of rows.
    pub const fn max_y(&self) -> u32 {
        self.max_y
    }

    /// Total number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Iterate over all nodes in scan order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Iterate over all nodes mutably in scan order.
    pub fn nodes_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.nodes.iter_mut()
    }

    /// Whether `cell` lies inside the grid bounds.
    pub const fn contains(&self, cell: GridCell) -> bool {
        cell.x < self.max_x && cell.y < self.max_y
    }

    /// Get the node at `cell`, or `None` when out of bounds.
    pub fn node(&self, cell: GridCell) -> Option<&Node> {
        self.index_of(cell).and_then(|i| self.nodes.get(i))
    }

    /// Get a mutable reference to the node at `cell`.
    pub fn node_mut(&mut self, cell: GridCell) -> Option<&mut Node> {
        self.index_of(cell).and_then(|i| self.nodes.get_mut(i))
    }

    /// Change the terrain of the node at `cell`.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::CellOutOfBounds`] if `cell` is outside the grid.
    pub fn set_terrain(&mut self, cell: GridCell, terrain: TerrainKind) -> Result<(), WorldError> {
        let (max_x, max_y) = (self.max_x, self.max_y);
        let node = self
            .node_mut(cell)
            .ok_or(WorldError::CellOutOfBounds { cell, max_x, max_y })?;
        node.set_terrain(terrain);
        Ok(())
    }

    /// Count nodes of the given terrain.
    pub fn count_of(&self, terrain: TerrainKind) -> usize {
        self.nodes.iter().filter(|n| n.terrain() == terrain).count()
    }

    /// Vector index of `cell`, column-major.
    fn index_of(&self, cell: GridCell) -> Option<usize> {
        if !self.contains(cell) {
            return None;
        }
        let index = u64::from(cell.x)
            .checked_mul(u64::from(self.max_y))?
            .checked_add(u64::from(cell.y))?;
        usize::try_from(index).ok()
    }
}

/// Cells orthogonally adjacent to `cell` that lie inside the grid.
fn adjacent_cells(cell: GridCell, max_x: u32, max_y: u32) -> Vec<GridCell> {
    let candidates = [
        cell.y.checked_add(1).map(|y| GridCell::new(cell.x, y)),
        cell.x.checked_add(1).map(|x| GridCell::new(x, cell.y)),
        cell.y.checked_sub(1).map(|y| GridCell::new(cell.x, y)),
        cell.x.checked_sub(1).map(|x| GridCell::new(x, cell.y)),
    ];
    candidates
        .into_iter()
        .flatten()
        .filter(|c| c.x < max_x && c.y < max_y)
        .collect()
}

/// Build a grid for tests.
#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) fn test_grid(max_x: u32, max_y: u32) -> Graph {
    Graph::grid(max_x, max_y).unwrap()
}
