//! Physical attacks and spell casts.
//!
//! Both actions target a monster within range 1 (the eight neighbouring
//! tiles or a shared tile). The dodge roll is seeded from the session seed
//! and the action nonce, so a replayed session resolves identically.

use crate::action::{ActionError, ActionOutcome, ActionTransition, acting_hero};
use crate::buff;
use crate::combat::{self, CombatReport, damage};
use crate::env::{GameEnv, ItemHandle, ItemKind, OracleError, SpellData, compute_seed, context};
use crate::state::{GameState, HeroId, MonsterId, MonsterState, Position};

/// Physical strike with the equipped weapon (or bare hands).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttackAction {
    pub hero: HeroId,
    pub target: MonsterId,
}

impl AttackAction {
    pub fn new(hero: HeroId, target: MonsterId) -> Self {
        Self { hero, target }
    }
}

/// Casts a single-use spell scroll from the inventory. The scroll and the
/// mana are consumed whether or not the target dodges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastAction {
    pub hero: HeroId,
    pub target: MonsterId,
    pub spell: ItemHandle,
}

impl CastAction {
    pub fn new(hero: HeroId, target: MonsterId, spell: ItemHandle) -> Self {
        Self {
            hero,
            target,
            spell,
        }
    }

    fn spell_data(&self, env: &GameEnv<'_>) -> Result<SpellData, ActionError> {
        let definition = env
            .items()?
            .definition(self.spell)
            .ok_or(OracleError::UnknownItem(self.spell))?;
        match definition.kind {
            ItemKind::Spell(data) => Ok(data),
            _ => Err(ActionError::WrongItemKind(self.spell)),
        }
    }
}

/// Looks up a living target in range of `origin`.
fn target_in_range<'a>(
    state: &'a GameState,
    origin: Position,
    target: MonsterId,
) -> Result<&'a MonsterState, ActionError> {
    let monster = state
        .monster(target)
        .ok_or(ActionError::TargetNotFound(target))?;
    if origin.chebyshev(monster.position) > 1 {
        return Err(ActionError::OutOfRange {
            origin,
            target: monster.position,
        });
    }
    Ok(monster)
}

/// Rolls the target's dodge for this action.
fn target_dodges(
    state: &GameState,
    env: &GameEnv<'_>,
    attacker: HeroId,
    dodge_bp: u32,
) -> Result<bool, ActionError> {
    let seed = compute_seed(
        state.game_seed,
        state.turn.nonce,
        attacker.raw(),
        context::DODGE,
    );
    Ok(combat::dodge_roll(env.rng()?, seed, dodge_bp))
}

/// Settles a connecting hit: applies damage, removes a defeated monster
/// from board and roster, refreshes the attacker's buff after level-ups.
fn settle_hit(
    state: &mut GameState,
    hero: HeroId,
    target: MonsterId,
    amount: u32,
) -> Result<CombatReport, ActionError> {
    let hero_index = hero.index();
    let monster_index = state
        .monsters
        .iter()
        .position(|monster| monster.id == target)
        .ok_or(ActionError::TargetNotFound(target))?;

    let report = combat::strike_monster(
        &mut state.party[hero_index],
        &mut state.monsters[monster_index],
        amount,
    );

    if report.defeated {
        let position = state.monsters[monster_index].position;
        state.board.take_monster(target, position);
        state.remove_monster(target);
    }
    if report.reward.is_some_and(|reward| reward.levels_gained > 0) {
        buff::refresh(&mut state.party[hero_index]);
    }

    Ok(report)
}

impl ActionTransition for AttackAction {
    fn actor(&self) -> HeroId {
        self.hero
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), ActionError> {
        let (_, origin) = acting_hero(state, self.hero)?;
        target_in_range(state, origin, self.target)?;
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<ActionOutcome, ActionError> {
        let (hero, origin) = acting_hero(state, self.hero)?;
        let monster = target_in_range(state, origin, self.target)?;

        let weapon_damage = match hero.equipment.weapon() {
            Some(handle) => {
                let definition = env
                    .items()?
                    .definition(handle)
                    .ok_or(OracleError::UnknownItem(handle))?;
                match definition.kind {
                    ItemKind::Weapon(data) => data.damage,
                    _ => return Err(ActionError::WrongItemKind(handle)),
                }
            }
            None => 0,
        };

        if target_dodges(state, env, self.hero, monster.dodge_bp)? {
            return Ok(ActionOutcome::Attacked(CombatReport::dodged()));
        }

        let amount = damage::physical(hero.effective.strength, weapon_damage, monster.defense);
        let report = settle_hit(state, self.hero, self.target, amount)?;
        Ok(ActionOutcome::Attacked(report))
    }
}

impl ActionTransition for CastAction {
    fn actor(&self) -> HeroId {
        self.hero
    }

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), ActionError> {
        let (hero, origin) = acting_hero(state, self.hero)?;
        if !hero.inventory.contains(self.spell) {
            return Err(ActionError::ItemNotInInventory(self.spell));
        }
        let data = self.spell_data(env)?;
        if hero.mana.current() < data.mana_cost {
            return Err(ActionError::InsufficientMana {
                required: data.mana_cost,
                available: hero.mana.current(),
            });
        }
        target_in_range(state, origin, self.target)?;
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<ActionOutcome, ActionError> {
        let (hero, origin) = acting_hero(state, self.hero)?;
        if !hero.inventory.contains(self.spell) {
            return Err(ActionError::ItemNotInInventory(self.spell));
        }
        let data = self.spell_data(env)?;
        let dodge_bp = target_in_range(state, origin, self.target)?.dodge_bp;
        let dexterity = hero.effective.dexterity;

        {
            let hero = state
                .hero_mut(self.hero)
                .ok_or(ActionError::HeroNotFound(self.hero))?;
            if !hero.spend_mana(data.mana_cost) {
                return Err(ActionError::InsufficientMana {
                    required: data.mana_cost,
                    available: hero.mana.current(),
                });
            }
            // The scroll burns on the cast, hit or miss.
            hero.inventory.remove(self.spell);
        }

        if target_dodges(state, env, self.hero, dodge_bp)? {
            return Ok(ActionOutcome::Cast(CombatReport::dodged()));
        }

        let amount = damage::spell(data.damage, dexterity);
        let report = settle_hit(state, self.hero, self.target, amount)?;

        if !report.defeated {
            if let Some(monster) = state.monster_mut(self.target) {
                monster.apply_element(data.element);
            }
        }

        Ok(ActionOutcome::Cast(report))
    }
}
