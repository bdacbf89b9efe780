//! Terrain attribute buffs.
//!
//! Bush, cave, and koulou tiles grant a 10% boost to one attribute while a
//! hero stands on them. The boost lives only in `effective`; `base` is
//! never touched, so entering and leaving a tile is always lossless.
//! Callers must re-apply after any base change (level-up, attribute
//! potion) so the boost tracks the grown base value.

use crate::state::{HeroState, TerrainKind};

/// Buff multiplier: effective = base * 11 / 10 on the boosted attribute.
const BUFF_NUMERATOR: u32 = 11;
const BUFF_DENOMINATOR: u32 = 10;

/// Applies the buff for the terrain the hero now stands on, replacing any
/// previous terrain buff. Terrain without a buff just clears.
pub fn apply(hero: &mut HeroState, terrain: TerrainKind) {
    remove(hero);
    if let Some(attribute) = terrain.buffed_attribute() {
        hero.effective
            .scale(attribute, BUFF_NUMERATOR, BUFF_DENOMINATOR);
        hero.active_buff = Some(terrain);
    }
}

/// Drops any active terrain buff, restoring effective to base.
pub fn remove(hero: &mut HeroState) {
    hero.effective = hero.base;
    hero.active_buff = None;
}

/// Re-derives the buff from the recorded terrain, for use after base
/// attributes changed underneath an active buff.
pub fn refresh(hero: &mut HeroState) {
    match hero.active_buff {
        Some(terrain) => apply(hero, terrain),
        None => hero.effective = hero.base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{HeroArchetype, HeroTemplate};
    use crate::state::{HeroId, Position};

    fn hero() -> HeroState {
        let template = HeroTemplate {
            name: "Rillifane".into(),
            archetype: HeroArchetype::Sorcerer,
            mana: 1300,
            strength: 750,
            dexterity: 500,
            agility: 450,
            gold: 2500,
        };
        HeroState::from_template(HeroId(0), &template, Position::new(7, 0), 0)
    }

    #[test]
    fn apply_and_remove_are_lossless() {
        let mut hero = hero();
        apply(&mut hero, TerrainKind::Koulou);
        assert_eq!(hero.effective.strength, 750 * 11 / 10);
        assert_eq!(hero.base.strength, 750);

        // Stepping onto a different buff tile swaps, never stacks.
        apply(&mut hero, TerrainKind::Bush);
        assert_eq!(hero.effective.strength, 750);
        assert_eq!(hero.effective.dexterity, 550);
        assert_eq!(hero.active_buff, Some(TerrainKind::Bush));

        remove(&mut hero);
        assert_eq!(hero.effective, hero.base);
        assert_eq!(hero.active_buff, None);
    }

    #[test]
    fn plain_terrain_clears() {
        let mut hero = hero();
        apply(&mut hero, TerrainKind::Cave);
        apply(&mut hero, TerrainKind::Plain);
        assert_eq!(hero.effective, hero.base);
        assert_eq!(hero.active_buff, None);
    }

    #[test]
    fn refresh_tracks_base_growth() {
        let mut hero = hero();
        apply(&mut hero, TerrainKind::Cave);
        let buffed = hero.effective.agility;

        hero.add_experience(10);
        refresh(&mut hero);
        assert_eq!(hero.active_buff, Some(TerrainKind::Cave));
        assert_eq!(hero.effective.agility, hero.base.agility * 11 / 10);
        assert!(hero.effective.agility > buffed);
    }
}
