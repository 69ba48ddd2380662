//! Error types for the engine binary.
//!
//! [`EngineError`] is the top-level error type that wraps all possible
//! failure modes during engine startup and the tick loop.

/// Top-level error for the engine binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: neurosim_core::ConfigError,
    },

    /// Grid construction failed.
    #[error("world error: {source}")]
    World {
        /// The underlying world error.
        #[from]
        source: neurosim_world::WorldError,
    },

    /// Context bootstrap or agent spawning failed.
    #[error("core error: {source}")]
    Core {
        /// The underlying core error.
        #[from]
        source: neurosim_core::CoreError,
    },
}
