//! Network shapes for every `(species, role)` brain.
//!
//! The table is populated from [`STANDARD_TOPOLOGY`], a fixed literal. It
//! must be initialised before any brain is built; re-initialising clears
//! the table first, so the result never depends on earlier contents.

use std::collections::BTreeMap;

use neurosim_types::{BrainRole, BrainShape, Species};

use super::BrainError;

/// One literal topology row: species, role, inputs, outputs, hidden widths.
type TopologyRow = (Species, BrainRole, usize, usize, &'static [usize]);

/// The shipped brain shapes.
pub const STANDARD_TOPOLOGY: [TopologyRow; 9] = [
    (Species::Carnivore, BrainRole::Eat, 4, 1, &[1]),
    (Species::Carnivore, BrainRole::Movement, 7, 3, &[3]),
    (Species::Carnivore, BrainRole::Attack, 4, 1, &[1]),
    (Species::Herbivore, BrainRole::Eat, 4, 1, &[1]),
    (Species::Herbivore, BrainRole::Movement, 8, 2, &[3]),
    (Species::Herbivore, BrainRole::Escape, 4, 1, &[1]),
    (Species::Scavenger, BrainRole::Eat, 4, 1, &[1]),
    (Species::Scavenger, BrainRole::ScavengerMovement, 7, 2, &[3]),
    (Species::Scavenger, BrainRole::Flocking, 16, 4, &[12, 8, 6, 4]),
];

/// Network shape per `(species, role)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrainTopologyTable {
    entries: BTreeMap<(Species, BrainRole), BrainShape>,
}

impl BrainTopologyTable {
    /// Create an empty, uninitialised table.
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Create a table initialised with [`STANDARD_TOPOLOGY`].
    pub fn standard() -> Self {
        let mut table = Self::new();
        table.init();
        table
    }

    /// Reset the table to exactly [`STANDARD_TOPOLOGY`].
    pub fn init(&mut self) {
        self.entries.clear();
        for (species, role, inputs, outputs, hidden) in STANDARD_TOPOLOGY {
            self.entries
                .insert((species, role), BrainShape::new(inputs, outputs, hidden));
        }
        tracing::debug!(entries = self.entries.len(), "Brain topology initialised");
    }

    /// Shape of the `role` brain for `species`.
    ///
    /// # Errors
    ///
    /// Returns [`BrainError::TopologyNotFound`] if the pair is unregistered.
    pub fn lookup(&self, role: BrainRole, species: Species) -> Result<&BrainShape, BrainError> {
        self.entries
            .get(&(species, role))
            .ok_or(BrainError::TopologyNotFound { species, role })
    }

    /// Whether the pair is registered.
    pub fn contains(&self, role: BrainRole, species: Species) -> bool {
        self.entries.contains_key(&(species, role))
    }

    /// Number of registered pairs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries ordered by species then role.
    pub fn iter(&self) -> impl Iterator<Item = (Species, BrainRole, &BrainShape)> {
        self.entries
            .iter()
            .map(|(&(species, role), shape)| (species, role, shape))
    }
}
