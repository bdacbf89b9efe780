//! Monster state and the template factory.

use crate::env::{MonsterCategory, MonsterTemplate, SpellElement};
use crate::state::{MonsterId, Position, ResourceMeter};

/// Divisor applied to raw template defense (`defense * 0.05`).
const DEFENSE_DIVISOR: u32 = 20;

/// Basis points of dodge per raw template dodge point (`dodge * 0.001`).
const DODGE_BP_PER_POINT: u32 = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterState {
    pub id: MonsterId,
    pub name: String,
    pub category: MonsterCategory,
    pub level: u32,
    pub health: ResourceMeter,

    /// Raw offensive stat; per-hit damage is derived by the combat
    /// formulas.
    pub damage: u32,
    /// Flat physical damage reduction.
    pub defense: u32,
    /// Dodge chance in basis points.
    pub dodge_bp: u32,

    pub position: Position,
}

impl MonsterState {
    /// Instantiates a monster from a template, scaled to `level` (spawn
    /// waves scale to the party's highest hero level).
    pub fn from_template(
        id: MonsterId,
        template: &MonsterTemplate,
        level: u32,
        position: Position,
    ) -> Self {
        Self {
            id,
            name: template.name.clone(),
            category: template.category,
            level,
            health: ResourceMeter::at_max(level * 100),
            damage: template.damage,
            defense: template.defense / DEFENSE_DIVISOR,
            dodge_bp: template.dodge * DODGE_BP_PER_POINT,
            position,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        !self.health.is_depleted()
    }

    #[inline]
    pub fn is_fainted(&self) -> bool {
        self.health.is_depleted()
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.health.deplete(amount);
    }

    /// Permanent elemental debuff from a connecting spell hit.
    pub fn apply_element(&mut self, element: SpellElement) {
        match element {
            SpellElement::Fire => self.defense = self.defense * 9 / 10,
            SpellElement::Ice => self.damage = self.damage * 9 / 10,
            SpellElement::Lightning => self.dodge_bp = self.dodge_bp * 9 / 10,
        }
    }
}
