//! Hero template definitions and oracle interface.
//!
//! Templates describe the starting sheet of a hero and come from an
//! external catalog (flat files parsed by `valor-content`, or literals in
//! tests). The core treats them as opaque data: party assembly itself is a
//! presentation concern.

use crate::state::Attribute;

/// Class archetype. Determines which two attributes receive the extra
/// growth multiplier on level-up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeroArchetype {
    Warrior,
    Sorcerer,
    Paladin,
}

impl HeroArchetype {
    /// The two attributes favored by this archetype.
    pub const fn favored(self) -> [Attribute; 2] {
        match self {
            Self::Warrior => [Attribute::Strength, Attribute::Agility],
            Self::Sorcerer => [Attribute::Dexterity, Attribute::Agility],
            Self::Paladin => [Attribute::Strength, Attribute::Dexterity],
        }
    }

    pub const fn favors(self, attribute: Attribute) -> bool {
        let [a, b] = self.favored();
        a as u8 == attribute as u8 || b as u8 == attribute as u8
    }
}

/// Starting sheet for a hero, consumed when assembling the party.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeroTemplate {
    pub name: String,
    pub archetype: HeroArchetype,
    pub mana: u32,
    pub strength: u32,
    pub dexterity: u32,
    pub agility: u32,
    pub gold: u32,
}

/// Read-only access to the hero template catalog.
pub trait HeroOracle: Send + Sync {
    fn all(&self) -> &[HeroTemplate];

    fn by_name(&self, name: &str) -> Option<&HeroTemplate> {
        self.all().iter().find(|template| template.name == name)
    }
}
