//! Error types for the simulation context.
//!
//! [`CoreError`] wraps the subsystem errors that surface through
//! [`SimContext`](crate::context::SimContext), so callers can propagate any
//! of them with `?`.

use neurosim_agents::AgentError;
use neurosim_world::WorldError;

use crate::brain::BrainError;

/// Top-level error for context construction and lifecycle operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// Brain-table lookup or validation failed.
    #[error("brain error: {source}")]
    Brain {
        /// The underlying brain error.
        #[from]
        source: BrainError,
    },

    /// Agent registry operation failed.
    #[error("agent error: {source}")]
    Agent {
        /// The underlying agent error.
        #[from]
        source: AgentError,
    },

    /// Grid operation failed.
    #[error("world error: {source}")]
    World {
        /// The underlying world error.
        #[from]
        source: WorldError,
    },
}
