//! Spatial queries over the navigation graph.
//!
//! Every query is a flat O(N) scan. There is no spatial index: the grid is
//! small and scans run once per agent decision. Nearest-match queries share
//! [`nearest_by`], which keeps the first minimal candidate in scan order.
//!
//! Random draws cover the whole grid or one of two horizontal bands used to
//! bias spawn placement:
//!
//! | Draw                            | Columns       | Rows                      |
//! |---------------------------------|---------------|---------------------------|
//! | [`Graph::random_node`]          | `[0, max_x)`  | `[0, max_y)`              |
//! | [`Graph::random_node_in_lower_band`] | `[0, max_x)` | `[1, max_y / 4)`      |
//! | [`Graph::random_node_in_upper_band`] | `[0, max_x)` | `[3 * max_y / 4, max_y - 1]` |

use core::ops::Range;

use neurosim_types::{Coordinate, GridCell, TerrainKind};
use rand::Rng;

use crate::graph::Graph;
use crate::node::Node;

/// Return the candidate closest to `position`.
///
/// A candidate replaces the current best only when strictly closer, so on
/// ties the earliest candidate yielded by `candidates` wins. Candidates whose
/// distance is NaN never match. Returns `None` when nothing qualifies.
pub fn nearest_by<T, C, I, F>(candidates: I, position: C, coordinate_of: F) -> Option<T>
where
    C: Coordinate,
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> C,
{
    let mut best: Option<(f32, T)> = None;
    for candidate in candidates {
        let distance = position.distance(coordinate_of(&candidate));
        if distance.is_nan() {
            continue;
        }
        if best.as_ref().is_none_or(|(min, _)| distance < *min) {
            best = Some((distance, candidate));
        }
    }
    best.map(|(_, candidate)| candidate)
}

impl Graph {
    /// Map a continuous position to the node containing it.
    ///
    /// Returns `None` if the position lies outside `[0, max_x) x [0, max_y)`
    /// or is not finite. Otherwise the position is truncated to the integer
    /// cell; there is no interpolation.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn coordinate_to_node<C: Coordinate>(&self, position: C) -> Option<&Node> {
        let (x, y) = (f64::from(position.x()), f64::from(position.y()));
        if !position.is_finite()
            || x < 0.0
            || y < 0.0
            || x >= f64::from(self.max_x())
            || y >= f64::from(self.max_y())
        {
            return None;
        }
        self.node(GridCell::new(x as u32, y as u32))
    }

    /// Find the node of the given terrain closest to `position`.
    ///
    /// Scans every node; on equal distance the earliest node in scan order
    /// wins. Returns `None` when no node has that terrain.
    pub fn nearest_node_of_type<C: Coordinate>(
        &self,
        terrain: TerrainKind,
        position: C,
    ) -> Option<&Node> {
        let nearest = nearest_by(
            self.nodes().filter(|node| node.terrain() == terrain),
            position,
            |node| node.coordinate::<C>(),
        );
        tracing::trace!(
            ?terrain,
            found = ?nearest.map(Node::cell),
            "Nearest node query"
        );
        nearest
    }

    /// Draw a node uniformly from the whole grid.
    pub fn random_node<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Node> {
        self.random_node_in_rows(rng, 0..self.max_y())
    }

    /// Rows covered by [`Self::random_node_in_lower_band`]: `[1, max_y / 4)`.
    pub const fn lower_band_rows(&self) -> Range<u32> {
        1..self.max_y() / 4
    }

    /// Rows covered by [`Self::random_node_in_upper_band`]:
    /// `[3 * max_y / 4, max_y - 1]`, last row included.
    pub fn upper_band_rows(&self) -> Range<u32> {
        let max_y = self.max_y();
        let start = u32::try_from(u64::from(max_y).saturating_mul(3) / 4).unwrap_or(max_y);
        start..max_y
    }

    /// Draw a node uniformly from the lower band.
    ///
    /// Returns `None` when the band is empty (grids with fewer than 8 rows).
    pub fn random_node_in_lower_band<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Node> {
        self.random_node_in_rows(rng, self.lower_band_rows())
    }

    /// Draw a node uniformly from the upper band.
    pub fn random_node_in_upper_band<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Node> {
        self.random_node_in_rows(rng, self.upper_band_rows())
    }

    /// Draw uniformly over all columns and the given rows.
    fn random_node_in_rows<R: Rng + ?Sized>(&self, rng: &mut R, rows: Range<u32>) -> Option<&Node> {
        if rows.is_empty() || self.max_x() == 0 {
            return None;
        }
        let x = rng.random_range(0..self.max_x());
        let y = rng.random_range(rows);
        self.node(GridCell::new(x, y))
    }
}
