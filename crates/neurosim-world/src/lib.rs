//! Navigation graph and spatial queries for the Neurosim simulation.
//!
//! This crate models the physical world as a dense grid of nodes, each with
//! a terrain kind, traversal cost, food stock and fixed adjacency. The graph
//! itself is built by the caller; this crate answers read-only questions
//! about it during a tick.
//!
//! # Modules
//!
//! - [`error`] -- Error types for graph construction and mutation.
//! - [`graph`] -- [`Graph`]: bounds, node storage, column-major scan order.
//! - [`node`] -- [`Node`]: one grid cell and its mutable state.
//! - [`spatial`] -- Coordinate-to-node mapping, nearest-node-of-type scans,
//!   and uniform random draws over the grid and its spawn bands.

pub mod error;
pub mod graph;
pub mod node;
pub mod spatial;

// Re-export primary types at crate root.
pub use error::WorldError;
pub use graph::Graph;
pub use node::{DEFAULT_NODE_COST, Node};
pub use spatial::nearest_by;
