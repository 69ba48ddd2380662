//! Enumeration types for the Neurosim simulation.
//!
//! Species tags, brain roles, and terrain classifications. These are the
//! keys of every lookup table in the workspace, so they derive `Ord` and
//! `Hash` and expose their full variant lists as constants.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Species
// ---------------------------------------------------------------------------

/// The species of a simulated agent.
///
/// The discriminant doubles as the raw species tag exchanged with
/// collaborators (`0` = herbivore, `1` = carnivore, `2` = scavenger).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Species {
    /// Grazes on bushes and escapes from carnivores.
    Herbivore,
    /// Hunts herbivores.
    Carnivore,
    /// Feeds on carrion and moves as a flock.
    Scavenger,
}

impl Species {
    /// Number of species variants.
    pub const COUNT: usize = 3;

    /// All species in tag order.
    pub const ALL: [Self; Self::COUNT] = [Self::Herbivore, Self::Carnivore, Self::Scavenger];

    /// Dense index of this species, usable for fixed-size per-species tables.
    pub const fn index(self) -> usize {
        match self {
            Self::Herbivore => 0,
            Self::Carnivore => 1,
            Self::Scavenger => 2,
        }
    }

    /// Whether agents of this species take part in flocking.
    pub const fn is_flocking(self) -> bool {
        matches!(self, Self::Scavenger)
    }

    /// Lowercase name used in configuration and logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Herbivore => "herbivore",
            Self::Carnivore => "carnivore",
            Self::Scavenger => "scavenger",
        }
    }
}

impl core::fmt::Display for Species {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A species tag or name that does not correspond to any [`Species`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnknownSpecies {
    /// Raw numeric tag outside the known range.
    #[error("unknown species tag: {0}")]
    Tag(u8),

    /// Name that matches no species.
    #[error("unknown species name: {0:?}")]
    Name(String),
}

impl TryFrom<u8> for Species {
    type Error = UnknownSpecies;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(Self::Herbivore),
            1 => Ok(Self::Carnivore),
            2 => Ok(Self::Scavenger),
            other => Err(UnknownSpecies::Tag(other)),
        }
    }
}

impl FromStr for Species {
    type Err = UnknownSpecies;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|species| species.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownSpecies::Name(s.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// Brain roles
// ---------------------------------------------------------------------------

/// The behaviour facet a brain governs.
///
/// Each species owns an ordered list of brains; the role identifies which
/// network in that list drives which decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BrainRole {
    /// Decides whether to eat at the current node.
    Eat,
    /// Chooses a movement direction across the graph.
    Movement,
    /// Scavenger movement, steered by flock output.
    ScavengerMovement,
    /// Decides whether to attack a nearby herbivore.
    Attack,
    /// Decides whether to flee from a nearby carnivore.
    Escape,
    /// Weighs alignment, cohesion, separation and direction for a boid.
    Flocking,
}

impl BrainRole {
    /// All roles in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Eat,
        Self::Movement,
        Self::ScavengerMovement,
        Self::Attack,
        Self::Escape,
        Self::Flocking,
    ];
}

// ---------------------------------------------------------------------------
// Terrain
// ---------------------------------------------------------------------------

/// Terrain classification of a graph node.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum TerrainKind {
    /// Open ground.
    #[default]
    Empty,
    /// Impassable.
    Blocked,
    /// Edible vegetation for herbivores.
    Bush,
    /// A fresh carcass left by a carnivore.
    Corpse,
    /// Decayed remains eaten by scavengers.
    Carrion,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn species_index_matches_all_order() {
        for (i, species) in Species::ALL.into_iter().enumerate() {
            assert_eq!(species.index(), i);
        }
    }

    #[test]
    fn species_tag_roundtrip() {
        for species in Species::ALL {
            let tag = u8::try_from(species.index()).unwrap_or(u8::MAX);
            assert_eq!(Species::try_from(tag), Ok(species));
        }
        assert_eq!(Species::try_from(3), Err(UnknownSpecies::Tag(3)));
    }

    #[test]
    fn species_parse_is_case_insensitive() {
        assert_eq!("Scavenger".parse::<Species>(), Ok(Species::Scavenger));
        assert_eq!(" carnivore ".parse::<Species>(), Ok(Species::Carnivore));
        assert!("omnivore".parse::<Species>().is_err());
    }

    #[test]
    fn only_scavengers_flock() {
        assert!(Species::Scavenger.is_flocking());
        assert!(!Species::Herbivore.is_flocking());
        assert!(!Species::Carnivore.is_flocking());
    }

    #[test]
    fn terrain_defaults_to_empty() {
        assert_eq!(TerrainKind::default(), TerrainKind::Empty);
    }
}
