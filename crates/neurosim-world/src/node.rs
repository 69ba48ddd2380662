//! A single cell of the navigation graph.

use neurosim_types::{Coordinate, GridCell, TerrainKind};
use serde::{Deserialize, Serialize};

/// Traversal cost assigned to freshly built nodes.
pub const DEFAULT_NODE_COST: u32 = 1;

/// One navigable grid cell.
///
/// Terrain, cost and food change as the simulation runs. Adjacency is fixed
/// when the graph is built and has no public setter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Grid cell of this node, unique within its graph.
    cell: GridCell,
    /// Terrain classification.
    terrain: TerrainKind,
    /// Traversal cost for movement through this node.
    cost: u32,
    /// Food units available here.
    food: u32,
    /// Adjacent cells.
    neighbors: Vec<GridCell>,
}

impl Node {
    /// Create an empty, unconnected node at `cell`.
    pub const fn new(cell: GridCell) -> Self {
        Self {
            cell,
            terrain: TerrainKind::Empty,
            cost: DEFAULT_NODE_COST,
            food: 0,
            neighbors: Vec::new(),
        }
    }

    /// Grid cell of this node.
    pub const fn cell(&self) -> GridCell {
        self.cell
    }

    /// Position of this node in coordinate type `C`.
    pub fn coordinate<C: Coordinate>(&self) -> C {
        self.cell.to_coordinate()
    }

    /// Terrain classification.
    pub const fn terrain(&self) -> TerrainKind {
        self.terrain
    }

    /// Change the terrain classification.
    pub const fn set_terrain(&mut self, terrain: TerrainKind) {
        self.terrain = terrain;
    }

    /// Whether agents may not enter this node.
    pub const fn is_blocked(&self) -> bool {
        matches!(self.terrain, TerrainKind::Blocked)
    }

    /// Traversal cost.
    pub const fn cost(&self) -> u32 {
        self.cost
    }

    /// Change the traversal cost.
    pub const fn set_cost(&mut self, cost: u32) {
        self.cost = cost;
    }

    /// Food units available.
    pub const fn food(&self) -> u32 {
        self.food
    }

    /// Change the food units available.
    pub const fn set_food(&mut self, food: u32) {
        self.food = food;
    }

    /// Adjacent cells.
    pub fn neighbors(&self) -> &[GridCell] {
        &self.neighbors
    }

    /// Wire adjacency during graph construction.
    pub(crate) fn set_neighbors(&mut self, neighbors: Vec<GridCell>) {
        self.neighbors = neighbors;
    }
}

#[cfg(test)]
mod tests {
    use neurosim_types::Vec2;

    use super::*;

    #[test]
    fn new_node_is_empty_open_ground() {
        let node = Node::new(GridCell::new(2, 3));
        assert_eq!(node.terrain(), TerrainKind::Empty);
        assert_eq!(node.cost(), DEFAULT_NODE_COST);
        assert_eq!(node.food(), 0);
        assert!(node.neighbors().is_empty());
        assert!(!node.is_blocked());
    }

    #[test]
    fn blocked_terrain_blocks() {
        let mut node = Node::new(GridCell::new(0, 0));
        node.set_terrain(TerrainKind::Blocked);
        assert!(node.is_blocked());
    }

    #[test]
    fn coordinate_matches_cell() {
        let node = Node::new(GridCell::new(4, 9));
        assert_eq!(node.coordinate::<Vec2>(), Vec2::new(4.0, 9.0));
    }

    #[test]
    fn mutable_state_is_updated() {
        let mut node = Node::new(GridCell::new(1, 1));
        node.set_food(12);
        node.set_cost(5);
        node.set_terrain(TerrainKind::Carrion);
        assert_eq!(node.food(), 12);
        assert_eq!(node.cost(), 5);
        assert_eq!(node.terrain(), TerrainKind::Carrion);
    }
}
