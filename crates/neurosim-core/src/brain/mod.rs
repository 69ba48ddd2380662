//! Brain configuration tables.
//!
//! Every species carries an ordered list of brains, one per behaviour role.
//! Two tables describe them, both built once at startup:
//!
//! - [`topology`] -- [`BrainTopologyTable`]: the network shape of each
//!   `(species, role)` brain.
//! - [`roles`] -- [`BrainRoleTable`]: which role sits in which slot of a
//!   species' brain list, and the reverse lookup from role to slot.
//!
//! A missing entry in either table is a configuration defect. Lookups
//! return [`BrainError`] and startup treats it as fatal.

pub mod roles;
pub mod topology;

use neurosim_types::{BrainRole, Species, UnknownSpecies};

pub use roles::BrainRoleTable;
pub use topology::BrainTopologyTable;

/// Errors from brain-table construction and lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BrainError {
    /// No network shape is registered for this pair.
    #[error("no brain topology registered for {species} / {role:?}")]
    TopologyNotFound {
        /// Species queried.
        species: Species,
        /// Role queried.
        role: BrainRole,
    },

    /// The species' role table has no slot for this role.
    #[error("{species} has no brain slot for role {role:?}")]
    RoleNotFound {
        /// Species queried.
        species: Species,
        /// Role queried.
        role: BrainRole,
    },

    /// A raw species tag or name did not match any species.
    #[error("invalid species: {source}")]
    InvalidSpecies {
        /// The rejected tag or name.
        #[from]
        source: UnknownSpecies,
    },

    /// A role table was built without an entry for this species.
    #[error("role table has no entry for {0}")]
    MissingSpecies(Species),

    /// A role table listed the same species twice.
    #[error("role table lists {0} more than once")]
    DuplicateSpecies(Species),

    /// A role appears in more than one slot of a species' table.
    #[error("{species} lists role {role:?} more than once")]
    DuplicateRole {
        /// Species whose table is ambiguous.
        species: Species,
        /// Repeated role.
        role: BrainRole,
    },
}

impl BrainError {
    /// Whether this error is a lookup miss, as opposed to a malformed
    /// argument or table.
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::TopologyNotFound { .. } | Self::RoleNotFound { .. }
        )
    }
}
