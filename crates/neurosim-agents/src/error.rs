//! Error types for the neurosim-agents crate.
//!
//! Registry operations that can fail return typed errors rather than
//! panicking. Queries never fail; an empty registry simply yields no match.

use neurosim_types::AgentId;

/// Errors that can occur during agent registry operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AgentError {
    /// An agent with this ID is already registered.
    #[error("agent already registered: {0}")]
    DuplicateAgent(AgentId),

    /// Agent with the given ID was not found in the registry.
    #[error("agent not found: {0}")]
    AgentNotFound(AgentId),

    /// A boid operation targeted an agent that carries no boid.
    #[error("agent {0} has no boid")]
    MissingBoid(AgentId),
}
