//! Brain-role resolution.
//!
//! Each species keeps its brains in an ordered list. The [`BrainRoleTable`]
//! records which role sits in which slot, and resolves the reverse
//! question: given a role, where is that brain in the species' list.
//! Roles are unique per species, so the answer is unambiguous.

use neurosim_types::{BrainRole, Species};

use super::BrainError;

/// Slot order of the shipped brains, per species.
pub const STANDARD_ROLES: [(Species, &[BrainRole]); Species::COUNT] = [
    (
        Species::Herbivore,
        &[BrainRole::Eat, BrainRole::Movement, BrainRole::Escape],
    ),
    (
        Species::Carnivore,
        &[BrainRole::Eat, BrainRole::Movement, BrainRole::Attack],
    ),
    (
        Species::Scavenger,
        &[
            BrainRole::Eat,
            BrainRole::ScavengerMovement,
            BrainRole::Flocking,
        ],
    ),
];

/// Ordered brain roles per species.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrainRoleTable {
    /// Role list per species, indexed by [`Species::index`].
    slots: [Vec<BrainRole>; Species::COUNT],
}

impl BrainRoleTable {
    /// The table shipped with the simulation.
    pub fn standard() -> Self {
        let [herbivore, carnivore, scavenger] = STANDARD_ROLES.map(|(_, roles)| roles.to_vec());
        Self {
            slots: [herbivore, carnivore, scavenger],
        }
    }

    /// Build a table from explicit `(species, roles)` entries.
    ///
    /// Every species must appear exactly once, and no role may appear
    /// twice within one species.
    ///
    /// # Errors
    ///
    /// Returns [`BrainError::DuplicateSpecies`],
    /// [`BrainError::DuplicateRole`], or [`BrainError::MissingSpecies`].
    pub fn from_slots<I>(entries: I) -> Result<Self, BrainError>
    where
        I: IntoIterator<Item = (Species, Vec<BrainRole>)>,
    {
        let mut slots: [Option<Vec<BrainRole>>; Species::COUNT] = Default::default();

        for (species, roles) in entries {
            for (position, role) in roles.iter().enumerate() {
                if roles.iter().skip(position.saturating_add(1)).any(|r| r == role) {
                    return Err(BrainError::DuplicateRole {
                        species,
                        role: *role,
                    });
                }
            }
            if let Some(entry) = slots.get_mut(species.index()) {
                if entry.is_some() {
                    return Err(BrainError::DuplicateSpecies(species));
                }
                *entry = Some(roles);
            }
        }

        let [herbivore, carnivore, scavenger] = slots;
        Ok(Self {
            slots: [
                herbivore.ok_or(BrainError::MissingSpecies(Species::Herbivore))?,
                carnivore.ok_or(BrainError::MissingSpecies(Species::Carnivore))?,
                scavenger.ok_or(BrainError::MissingSpecies(Species::Scavenger))?,
            ],
        })
    }

    /// Roles of `species` in slot order.
    pub fn roles(&self, species: Species) -> &[BrainRole] {
        self.slots.get(species.index()).map_or(&[], Vec::as_slice)
    }

    /// Role stored in `slot` of `species`' brain list.
    pub fn role_at(&self, species: Species, slot: usize) -> Option<BrainRole> {
        self.roles(species).get(slot).copied()
    }

    /// Slot index of the `role` brain in `species`' brain list.
    ///
    /// # Errors
    ///
    /// Returns [`BrainError::RoleNotFound`] if the species has no such role.
    pub fn resolve_slot(&self, role: BrainRole, species: Species) -> Result<usize, BrainError> {
        self.roles(species)
            .iter()
            .position(|r| *r == role)
            .ok_or(BrainError::RoleNotFound { species, role })
    }

    /// Like [`resolve_slot`](Self::resolve_slot), for a raw species tag.
    ///
    /// # Errors
    ///
    /// Returns [`BrainError::InvalidSpecies`] if `tag` names no species, or
    /// [`BrainError::RoleNotFound`] as for `resolve_slot`.
    pub fn resolve_slot_tagged(&self, role: BrainRole, tag: u8) -> Result<usize, BrainError> {
        let species = Species::try_from(tag)?;
        self.resolve_slot(role, species)
    }

    /// Iterate over every species and its roles.
    pub fn iter(&self) -> impl Iterator<Item = (Species, &[BrainRole])> {
        Species::ALL
            .into_iter()
            .map(|species| (species, self.roles(species)))
    }
}

impl Default for BrainRoleTable {
    fn default() -> Self {
        Self::standard()
    }
}
