//! Simulation context, brain tables, and configuration for the Neurosim simulation.
//!
//! This crate wires the navigation graph and the agent registry into one
//! [`SimContext`], built once at startup alongside the brain tables every
//! agent's brains are constructed from.
//!
//! # Modules
//!
//! - [`brain`] -- [`BrainTopologyTable`] (network shape per species and role)
//!   and [`BrainRoleTable`] (brain slot order per species).
//! - [`config`] -- Configuration loading from `neurosim-config.yaml` into
//!   strongly-typed structs.
//! - [`context`] -- [`SimContext`]: bootstrap, spatial queries, flocking pass,
//!   and lifecycle hooks.
//! - [`error`] -- [`CoreError`] wrapping every subsystem error.
//!
//! [`BrainTopologyTable`]: brain::BrainTopologyTable
//! [`BrainRoleTable`]: brain::BrainRoleTable

pub mod brain;
pub mod config;
pub mod context;
pub mod error;

pub use brain::{BrainError, BrainRoleTable, BrainTopologyTable};
pub use config::{ConfigError, SimulationConfig};
pub use context::SimContext;
pub use error::CoreError;
