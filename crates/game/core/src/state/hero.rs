//! Hero state: resources, attributes, progression, equipment.
//!
//! Heroes are created once at party setup and mutated in place for the
//! whole session. `base` attributes are the single source of truth;
//! `effective` carries the terrain buff and must be re-derived through
//! [`crate::buff`] after any base change.

use crate::env::{HeroArchetype, HeroTemplate};
use crate::state::{
    Attribute, AttributeBlock, Equipment, HeroId, InventoryState, Position, ResourceMeter,
    TerrainKind,
};

/// Dodge chance per point of effective agility, in basis points
/// (agility × 0.0002 ⇒ 2 bp per point).
const DODGE_BP_PER_AGILITY: u32 = 2;

/// Experience needed to advance from `level` is `level * XP_THRESHOLD_PER_LEVEL`.
const XP_THRESHOLD_PER_LEVEL: u32 = 10;

/// Max health per level.
const HEALTH_PER_LEVEL: u32 = 100;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeroState {
    pub id: HeroId,
    pub name: String,
    pub archetype: HeroArchetype,
    pub level: u32,
    pub experience: u32,

    pub health: ResourceMeter,
    pub mana: ResourceMeter,

    /// Unbuffed attributes; the only values progression touches.
    pub base: AttributeBlock,
    /// Attributes after the terrain buff. Combat reads these.
    pub effective: AttributeBlock,

    pub gold: u32,
    pub equipment: Equipment,
    pub inventory: InventoryState,

    /// Board position. `None` while fainted and awaiting respawn.
    pub position: Option<Position>,
    /// Recorded spawn tile on the hero nexus row.
    pub spawn: Position,
    /// Lane the hero spawned in.
    pub lane: usize,

    /// Terrain of the currently applied buff, if any.
    pub active_buff: Option<TerrainKind>,
}

impl HeroState {
    /// Creates a level-1 hero from a template, standing on its spawn tile.
    pub fn from_template(id: HeroId, template: &HeroTemplate, spawn: Position, lane: usize) -> Self {
        let base = AttributeBlock::new(template.strength, template.dexterity, template.agility);
        Self {
            id,
            name: template.name.clone(),
            archetype: template.archetype,
            level: 1,
            experience: 0,
            health: ResourceMeter::at_max(HEALTH_PER_LEVEL),
            mana: ResourceMeter::at_max(template.mana),
            base,
            effective: base,
            gold: template.gold,
            equipment: Equipment::default(),
            inventory: InventoryState::new(),
            position: Some(spawn),
            spawn,
            lane,
            active_buff: None,
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

    /// Dodge chance in basis points, derived from effective agility.
    pub fn dodge_bp(&self) -> u32 {
        self.effective.agility.saturating_mul(DODGE_BP_PER_AGILITY)
    }

    pub fn add_gold(&mut self, amount: u32) {
        self.gold = self.gold.saturating_add(amount);
    }

    pub fn spend_mana(&mut self, amount: u32) -> bool {
        if self.mana.current() >= amount {
            self.mana.deplete(amount);
            true
        } else {
            false
        }
    }

    /// Awards experience and applies any level-ups, one threshold at a
    /// time. Returns the number of levels gained.
    ///
    /// The caller must refresh the terrain buff afterwards so `effective`
    /// reflects the grown base attributes.
    pub fn add_experience(&mut self, amount: u32) -> u32 {
        self.experience = self.experience.saturating_add(amount);
        let mut levels = 0;
        while self.experience >= self.level * XP_THRESHOLD_PER_LEVEL {
            self.experience -= self.level * XP_THRESHOLD_PER_LEVEL;
            self.level_up();
            levels += 1;
        }
        levels
    }

    /// One level: max health rebased to `level * 100`, mana grows ×1.10,
    /// all attributes ×1.05, the two archetype-favored ones a further
    /// ×1.05. Everything refills.
    fn level_up(&mut self) {
        self.level += 1;
        self.health.reset_maximum(self.level * HEALTH_PER_LEVEL);
        self.mana.reset_maximum(self.mana.maximum() * 11 / 10);

        for attribute in [Attribute::Strength, Attribute::Dexterity, Attribute::Agility] {
            self.base.scale(attribute, 21, 20);
            if self.archetype.favors(attribute) {
                self.base.scale(attribute, 21, 20);
            }
        }
    }

    /// Revives a fainted hero with exactly half of max health and mana.
    /// Placement back on the board is the round controller's job.
    pub fn revive(&mut self) {
        self.health.set_to_half();
        self.mana.set_to_half();
    }

    /// End-of-round recovery: regain `max / divisor` health and mana.
    pub fn recover(&mut self, divisor: u32) {
        self.health.restore(self.health.maximum() / divisor);
        self.mana.restore(self.mana.maximum() / divisor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template() -> HeroTemplate {
        HeroTemplate {
            name: "Gaerdal".into(),
            archetype: HeroArchetype::Warrior,
            mana: 100,
            strength: 700,
            dexterity: 500,
            agility: 600,
            gold: 1354,
        }
    }

    fn hero() -> HeroState {
        HeroState::from_template(HeroId(0), &template(), Position::new(7, 0), 0)
    }

    #[test]
    fn starts_at_level_one_full_meters() {
        let hero = hero();
        assert_eq!(hero.level, 1);
        assert_eq!(hero.health.maximum(), 100);
        assert_eq!(hero.health.current(), 100);
        assert_eq!(hero.mana.current(), 100);
        assert_eq!(hero.effective, hero.base);
    }

    #[test]
    fn level_up_math() {
        let mut hero = hero();
        let levels = hero.add_experience(10);
        assert_eq!(levels, 1);
        assert_eq!(hero.level, 2);
        assert_eq!(hero.experience, 0);
        assert_eq!(hero.health.maximum(), 200);
        assert_eq!(hero.health.current(), 200);
        // 100 * 11 / 10
        assert_eq!(hero.mana.maximum(), 110);
        // Warrior favors strength and agility: x1.05 twice (floored per step).
        assert_eq!(hero.base.strength, 700 * 21 / 20 * 21 / 20);
        assert_eq!(hero.base.agility, 600 * 21 / 20 * 21 / 20);
        // Dexterity grows once.
        assert_eq!(hero.base.dexterity, 500 * 21 / 20);
    }

    #[test]
    fn multiple_thresholds_apply_one_level_at_a_time() {
        let mut hero = hero();
        // 10 for level 1 -> 2, then 20 for level 2 -> 3.
        let levels = hero.add_experience(30);
        assert_eq!(levels, 2);
        assert_eq!(hero.level, 3);
        assert_eq!(hero.experience, 0);
        assert_eq!(hero.health.maximum(), 300);
    }

    #[test]
    fn revive_halves_exactly() {
        let mut hero = hero();
        hero.take_damage(1000);
        assert!(hero.is_fainted());
        hero.revive();
        assert_eq!(hero.health.current(), 50);
        assert_eq!(hero.mana.current(), 50);
        assert!(hero.is_alive());
    }

    #[test]
    fn recovery_is_floored_and_clamped() {
        let mut hero = hero();
        hero.take_damage(5);
        hero.recover(10);
        assert_eq!(hero.health.current(), 100);
        hero.take_damage(50);
        hero.recover(10);
        assert_eq!(hero.health.current(), 60);
    }

    #[test]
    fn spend_mana_requires_balance() {
        let mut hero = hero();
        assert!(hero.spend_mana(60));
        assert!(!hero.spend_mana(60));
        assert_eq!(hero.mana.current(), 40);
    }
}
