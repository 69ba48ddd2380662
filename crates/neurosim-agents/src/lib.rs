//! Agent registry and agent-centred queries for the Neurosim simulation.
//!
//! This crate holds the live population: the [`AgentRegistry`] keyed by
//! [`AgentId`], nearest-agent scans, and the parallel radius-neighbour query
//! that feeds flocking brains. It sits between `neurosim-world` (which owns
//! the graph the agents stand on) and `neurosim-core` (which wires both into
//! a simulation context).
//!
//! # Modules
//!
//! - [`agent`] -- [`Agent`] and its flocking descriptor [`Boid`]
//! - [`error`] -- Error types for registry operations ([`AgentError`])
//! - [`flocking`] -- Parallel radius-neighbour query over flocking agents
//! - [`registry`] -- [`AgentRegistry`]: lifecycle, lookup, nearest-agent scan
//!
//! [`AgentId`]: neurosim_types::AgentId

pub mod agent;
pub mod error;
pub mod flocking;
pub mod registry;

// Re-export primary types at crate root for convenience.
pub use agent::{Agent, Boid};
pub use error::AgentError;
pub use registry::AgentRegistry;
