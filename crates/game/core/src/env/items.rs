//! Item definitions and oracle interface.
//!
//! Inventories and equipment slots store [`ItemHandle`]s; the definition
//! behind a handle lives in the catalog and is resolved through
//! [`ItemOracle`] at the point of use. Display data (names) rides along in
//! the definition since the core has no other string source.

use std::fmt;

/// Stable identifier of an item definition in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemHandle(pub u16);

impl fmt::Display for ItemHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

/// Item definition with common fields and type-specific data.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub handle: ItemHandle,
    pub name: String,
    pub price: u32,
    pub required_level: u32,
    pub kind: ItemKind,
}

/// Item type with type-specific data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    /// Equippable weapon.
    Weapon(WeaponData),

    /// Equippable armor.
    Armor(ArmorData),

    /// Single-use stat or resource boost.
    Potion(PotionData),

    /// Single-use damaging spell.
    Spell(SpellData),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponData {
    pub damage: u32,
    pub hands: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArmorData {
    /// Flat damage reduction applied to incoming physical hits.
    pub reduction: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PotionData {
    pub effect: PotionEffect,
    pub amount: u32,
}

/// What a potion restores or raises. Resource effects are clamped by the
/// meter; attribute effects raise the base value permanently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PotionEffect {
    Health,
    Mana,
    Strength,
    Dexterity,
    Agility,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellData {
    pub damage: u32,
    pub mana_cost: u32,
    pub element: SpellElement,
}

/// Elemental school of a spell; determines the permanent debuff applied to
/// a monster on a connecting hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpellElement {
    Fire,
    Ice,
    Lightning,
}

/// Read-only access to the item catalog.
pub trait ItemOracle: Send + Sync {
    fn definition(&self, handle: ItemHandle) -> Option<&ItemDefinition>;

    fn all(&self) -> &[ItemDefinition];
}
