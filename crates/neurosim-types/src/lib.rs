//! Shared type definitions for the Neurosim simulation.
//!
//! This crate is the single source of truth for the vocabulary used across
//! the workspace: agent identifiers, species and brain-role tags, terrain
//! kinds, coordinates, and brain shape descriptors.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers for entity identifiers
//! - [`enums`] -- Species, brain roles, and terrain kinds
//! - [`coordinate`] -- The [`Coordinate`] trait, [`Vec2`] and [`GridCell`]
//! - [`structs`] -- [`BrainShape`] and [`Transform`]

pub mod coordinate;
pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use coordinate::{Coordinate, GridCell, Vec2};
pub use enums::{BrainRole, Species, TerrainKind, UnknownSpecies};
pub use ids::AgentId;
pub use structs::{BrainShape, Transform};
