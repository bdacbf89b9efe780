//! Potion use and equipment changes. Both consume the hero's turn.

use crate::action::{ActionError, ActionOutcome, ActionTransition, acting_hero};
use crate::buff;
use crate::env::{GameEnv, ItemHandle, ItemKind, OracleError, PotionEffect};
use crate::state::{GameState, HeroId};

/// Drinks a potion from the inventory. Resource potions restore a meter;
/// attribute potions raise the base value permanently.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UsePotionAction {
    pub hero: HeroId,
    pub potion: ItemHandle,
}

impl UsePotionAction {
    pub fn new(hero: HeroId, potion: ItemHandle) -> Self {
        Self { hero, potion }
    }
}

impl ActionTransition for UsePotionAction {
    fn actor(&self) -> HeroId {
        self.hero
    }

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), ActionError> {
        let (hero, _) = acting_hero(state, self.hero)?;
        if !hero.inventory.contains(self.potion) {
            return Err(ActionError::ItemNotInInventory(self.potion));
        }
        let definition = env
            .items()?
            .definition(self.potion)
            .ok_or(OracleError::UnknownItem(self.potion))?;
        match definition.kind {
            ItemKind::Potion(_) => Ok(()),
            _ => Err(ActionError::WrongItemKind(self.potion)),
        }
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<ActionOutcome, ActionError> {
        acting_hero(state, self.hero)?;
        let definition = env
            .items()?
            .definition(self.potion)
            .ok_or(OracleError::UnknownItem(self.potion))?;
        let ItemKind::Potion(data) = definition.kind else {
            return Err(ActionError::WrongItemKind(self.potion));
        };

        let hero = state
            .hero_mut(self.hero)
            .ok_or(ActionError::HeroNotFound(self.hero))?;
        if !hero.inventory.remove(self.potion) {
            return Err(ActionError::ItemNotInInventory(self.potion));
        }

        match data.effect {
            PotionEffect::Health => hero.health.restore(data.amount),
            PotionEffect::Mana => hero.mana.restore(data.amount),
            PotionEffect::Strength => {
                hero.base.strength += data.amount;
                buff::refresh(hero);
            }
            PotionEffect::Dexterity => {
                hero.base.dexterity += data.amount;
                buff::refresh(hero);
            }
            PotionEffect::Agility => {
                hero.base.agility += data.amount;
                buff::refresh(hero);
            }
        }

        Ok(ActionOutcome::DrankPotion {
            effect: data.effect,
            amount: data.amount,
        })
    }
}

/// Equips a weapon or armor piece from the inventory; anything previously
/// in the slot swaps back into the freed inventory slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EquipAction {
    pub hero: HeroId,
    pub item: ItemHandle,
}

impl EquipAction {
    pub fn new(hero: HeroId, item: ItemHandle) -> Self {
        Self { hero, item }
    }
}

impl ActionTransition for EquipAction {
    fn actor(&self) -> HeroId {
        self.hero
    }

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), ActionError> {
        let (hero, _) = acting_hero(state, self.hero)?;
        if !hero.inventory.contains(self.item) {
            return Err(ActionError::ItemNotInInventory(self.item));
        }
        let definition = env
            .items()?
            .definition(self.item)
            .ok_or(OracleError::UnknownItem(self.item))?;
        if !matches!(definition.kind, ItemKind::Weapon(_) | ItemKind::Armor(_)) {
            return Err(ActionError::WrongItemKind(self.item));
        }
        if hero.level < definition.required_level {
            return Err(ActionError::LevelTooLow {
                required: definition.required_level,
                actual: hero.level,
            });
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<ActionOutcome, ActionError> {
        self.pre_validate(state, env)?;
        let definition = env
            .items()?
            .definition(self.item)
            .ok_or(OracleError::UnknownItem(self.item))?;

        let hero = state
            .hero_mut(self.hero)
            .ok_or(ActionError::HeroNotFound(self.hero))?;
        hero.inventory.remove(self.item);

        let replaced = match definition.kind {
            ItemKind::Weapon(_) => hero.equipment.equip_weapon(self.item),
            ItemKind::Armor(_) => hero.equipment.equip_armor(self.item),
            _ => return Err(ActionError::WrongItemKind(self.item)),
        };
        if let Some(previous) = replaced {
            // A slot was just freed, so this cannot overflow.
            hero.inventory.add(previous);
        }

        Ok(ActionOutcome::Equipped {
            item: self.item,
            replaced,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::kinds::testkit::{self, TestCatalog};
    use crate::config::GameConfig;
    use crate::state::TerrainKind;

    #[test]
    fn health_potion_restores_clamped() {
        let mut state = testkit::state_with_party();
        let config = GameConfig::default();
        let catalog = TestCatalog::standard();
        let env = testkit::env(&config, &catalog);

        state.party[0].inventory.add(TestCatalog::HEALTH_POTION);
        state.party[0].take_damage(30);

        let outcome = UsePotionAction::new(HeroId(0), TestCatalog::HEALTH_POTION)
            .apply(&mut state, &env)
            .unwrap();
        assert_eq!(
            outcome,
            ActionOutcome::DrankPotion {
                effect: PotionEffect::Health,
                amount: 100,
            }
        );
        // 70 + 100 clamps at the maximum of 100.
        assert_eq!(state.party[0].health.current(), 100);
        assert!(!state.party[0].inventory.contains(TestCatalog::HEALTH_POTION));
    }

    #[test]
    fn attribute_potion_raises_base_through_active_buff() {
        let mut state = testkit::state_with_party();
        let config = GameConfig::default();
        let catalog = TestCatalog::standard();
        let env = testkit::env(&config, &catalog);

        state.party[0].inventory.add(TestCatalog::STRENGTH_POTION);
        buff::apply(&mut state.party[0], TerrainKind::Koulou);

        UsePotionAction::new(HeroId(0), TestCatalog::STRENGTH_POTION)
            .apply(&mut state, &env)
            .unwrap();
        let hero = &state.party[0];
        assert_eq!(hero.base.strength, 775);
        // The buff re-derives from the grown base.
        assert_eq!(hero.effective.strength, 775 * 11 / 10);
    }

    #[test]
    fn equipping_swaps_with_previous_weapon() {
        let mut state = testkit::state_with_party();
        let config = GameConfig::default();
        let catalog = TestCatalog::standard();
        let env = testkit::env(&config, &catalog);

        state.party[0].inventory.add(TestCatalog::SWORD);
        EquipAction::new(HeroId(0), TestCatalog::SWORD)
            .apply(&mut state, &env)
            .unwrap();
        assert_eq!(state.party[0].equipment.weapon(), Some(TestCatalog::SWORD));
        assert!(state.party[0].inventory.is_empty());

        // Level 5 requirement blocks the greatsword.
        state.party[0].inventory.add(TestCatalog::GREATSWORD);
        let action = EquipAction::new(HeroId(0), TestCatalog::GREATSWORD);
        assert_eq!(
            action.pre_validate(&state, &env),
            Err(ActionError::LevelTooLow {
                required: 5,
                actual: 1,
            })
        );

        // Level up far enough and the swap returns the sword.
        state.party[0].add_experience(100);
        EquipAction::new(HeroId(0), TestCatalog::GREATSWORD)
            .apply(&mut state, &env)
            .unwrap();
        assert_eq!(
            state.party[0].equipment.weapon(),
            Some(TestCatalog::GREATSWORD)
        );
        assert!(state.party[0].inventory.contains(TestCatalog::SWORD));
    }

    #[test]
    fn potion_kind_is_checked() {
        let mut state = testkit::state_with_party();
        let config = GameConfig::default();
        let catalog = TestCatalog::standard();
        let env = testkit::env(&config, &catalog);

        state.party[0].inventory.add(TestCatalog::SWORD);
        let action = UsePotionAction::new(HeroId(0), TestCatalog::SWORD);
        assert_eq!(
            action.pre_validate(&state, &env),
            Err(ActionError::WrongItemKind(TestCatalog::SWORD))
        );
    }
}
