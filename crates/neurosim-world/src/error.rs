//! Error types for the `neurosim-world` crate.
//!
//! Graph construction and terrain edits return [`WorldError`]. Spatial
//! queries never fail; a miss is `None`.

use neurosim_types::GridCell;

/// Errors that can occur during graph construction and mutation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    /// A grid with a zero dimension cannot hold any node.
    #[error("grid must have at least one node (got {max_x}x{max_y})")]
    EmptyGrid {
        /// Requested column count.
        max_x: u32,
        /// Requested row count.
        max_y: u32,
    },

    /// The requested grid does not fit in addressable memory.
    #[error("grid of {max_x}x{max_y} nodes is too large")]
    GridTooLarge {
        /// Requested column count.
        max_x: u32,
        /// Requested row count.
        max_y: u32,
    },

    /// A cell lies outside `[0, max_x) x [0, max_y)`.
    #[error("cell {cell} is outside the {max_x}x{max_y} grid")]
    CellOutOfBounds {
        /// The offending cell.
        cell: GridCell,
        /// Column bound.
        max_x: u32,
        /// Row bound.
        max_y: u32,
    },
}
