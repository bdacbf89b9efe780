//! End-of-round resolution: monster phase, recovery, spawning, respawns.
//!
//! Monsters are simple: attack a hero in range if there is one, otherwise
//! advance one row toward the hero nexus. Each monster event consumes one
//! nonce, so the whole phase is replayable from the session seed.

use crate::action::ActionError;
use crate::buff;
use crate::combat::{self, CombatReport};
use crate::engine::errors::ExecuteError;
use crate::env::{GameEnv, ItemKind, OracleError, compute_seed, context};
use crate::state::{
    BoardState, GameState, HeroId, MonsterAdvance, MonsterId, Position, RoundPhase, Victory,
};

/// One monster's contribution to the round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MonsterEvent {
    Attacked {
        monster: MonsterId,
        hero: HeroId,
        report: CombatReport,
    },
    Advanced {
        monster: MonsterId,
        to: Position,
    },
    ClearedObstacle {
        monster: MonsterId,
        at: Position,
    },
    Held {
        monster: MonsterId,
    },
}

/// Everything that happened while finishing a round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundReport {
    /// The round that just completed.
    pub round: u32,
    pub events: Vec<MonsterEvent>,
    pub spawned: Vec<MonsterId>,
    pub respawned: Vec<HeroId>,
    pub victory: Option<Victory>,
}

pub(super) fn finish(
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<RoundReport, ExecuteError> {
    let round = state.turn.round;
    let mut events = Vec::new();

    for id in state.monster_ids() {
        events.push(monster_turn(state, env, id)?);
    }

    for hero in state.party.iter_mut().filter(|hero| hero.is_alive()) {
        hero.recover(env.config().recovery_divisor);
    }

    state.turn.round = round + 1;
    let spawned = if state.turn.round % env.config().spawn_interval == 0 {
        spawn_wave(state, env)?
    } else {
        Vec::new()
    };

    let respawned = respawn_fainted(state);

    // Both nexus checks run once, after every actor has acted. A hero who
    // reached the monster nexus during the hero phase won it first.
    let victory = if state.board.hero_on_monster_nexus().is_some() {
        Some(Victory::Heroes)
    } else if state.board.monster_on_hero_nexus().is_some() {
        Some(Victory::Monsters)
    } else {
        None
    };
    state.victory = victory;

    state.turn.phase = RoundPhase::Heroes;
    state.turn.next_hero = 0;

    Ok(RoundReport {
        round,
        events,
        spawned,
        respawned,
        victory,
    })
}

/// Resolves one monster: attack a hero in range, otherwise advance.
fn monster_turn(
    state: &mut GameState,
    env: &GameEnv<'_>,
    id: MonsterId,
) -> Result<MonsterEvent, ExecuteError> {
    let Some(monster) = state.monster(id) else {
        return Ok(MonsterEvent::Held { monster: id });
    };
    let position = monster.position;
    let raw_damage = monster.damage;

    let targets: Vec<HeroId> = state
        .party
        .iter()
        .filter(|hero| {
            hero.is_alive()
                && hero
                    .position
                    .is_some_and(|hero_position| position.chebyshev(hero_position) <= 1)
        })
        .map(|hero| hero.id)
        .collect();

    if targets.is_empty() {
        return advance(state, id, position);
    }

    let nonce = state.turn.nonce;
    state.turn.nonce += 1;

    let rng = env.rng()?;
    let target = if targets.len() == 1 {
        targets[0]
    } else {
        let seed = compute_seed(state.game_seed, nonce, id.raw(), context::TARGET);
        targets[rng.pick_index(seed, targets.len())]
    };

    let hero = state
        .hero(target)
        .ok_or(ActionError::HeroNotFound(target))?;
    let dodge_bp = hero.dodge_bp();
    let reduction = match hero.equipment.armor() {
        Some(handle) => {
            let definition = env
                .items()?
                .definition(handle)
                .ok_or(OracleError::UnknownItem(handle))?;
            match definition.kind {
                ItemKind::Armor(data) => data.reduction,
                _ => return Err(ActionError::WrongItemKind(handle).into()),
            }
        }
        None => 0,
    };

    let dodge_seed = compute_seed(state.game_seed, nonce, id.raw(), context::DODGE);
    if combat::dodge_roll(rng, dodge_seed, dodge_bp) {
        return Ok(MonsterEvent::Attacked {
            monster: id,
            hero: target,
            report: CombatReport::dodged(),
        });
    }

    let damage = combat::damage::physical(raw_damage, 0, reduction);
    let hero = state
        .hero_mut(target)
        .ok_or(ActionError::HeroNotFound(target))?;
    let report = combat::strike_hero(hero, damage);

    if report.defeated {
        let hero_position = hero.position;
        buff::remove(hero);
        hero.position = None;
        if let Some(hero_position) = hero_position {
            state.board.take_hero(target, hero_position);
        }
    }

    Ok(MonsterEvent::Attacked {
        monster: id,
        hero: target,
        report,
    })
}

fn advance(
    state: &mut GameState,
    id: MonsterId,
    position: Position,
) -> Result<MonsterEvent, ExecuteError> {
    match state.board.validate_monster_advance(position) {
        MonsterAdvance::Move(to) => {
            if !state.board.take_monster(id, position) || !state.board.place_monster(id, to) {
                return Err(ActionError::MonsterOccupancyDesync(id).into());
            }
            if let Some(monster) = state.monster_mut(id) {
                monster.position = to;
            }
            Ok(MonsterEvent::Advanced { monster: id, to })
        }
        MonsterAdvance::ClearObstacle(at) => {
            state.board.clear_obstacle(at);
            Ok(MonsterEvent::ClearedObstacle { monster: id, at })
        }
        MonsterAdvance::Blocked => Ok(MonsterEvent::Held { monster: id }),
    }
}

/// Spawns one monster per lane on the monster nexus, scaled to the
/// party's highest level. Occupied spawn tiles and a full roster skip
/// silently; the next wave retries.
fn spawn_wave(state: &mut GameState, env: &GameEnv<'_>) -> Result<Vec<MonsterId>, ExecuteError> {
    let rng = env.rng()?;
    let templates = env.monsters()?;
    let level = state.highest_hero_level();
    let mut spawned = Vec::new();

    for lane in 0..crate::config::GameConfig::LANE_COUNT {
        if state.monsters.is_full() {
            break;
        }
        let position = Position::new(state.board.monster_nexus_row(), BoardState::lane_anchor(lane));
        if state.board.monster_at(position).is_some() {
            continue;
        }

        let nonce = state.turn.nonce;
        state.turn.nonce += 1;
        let seed = compute_seed(state.game_seed, nonce, lane as u32, context::SPAWN);
        let template = templates
            .pick(rng.next_u32(seed))
            .ok_or(OracleError::NoMonsterTemplates)?
            .clone();

        if let Ok(id) = state.spawn_monster(&template, level, position) {
            spawned.push(id);
        }
    }

    Ok(spawned)
}

/// Revives fainted heroes on their spawn tiles. A spawn tile occupied by
/// another hero defers that respawn to the next round.
fn respawn_fainted(state: &mut GameState) -> Vec<HeroId> {
    let pending: Vec<HeroId> = state
        .party
        .iter()
        .filter(|hero| hero.is_fainted() && state.board.hero_at(hero.spawn).is_none())
        .map(|hero| hero.id)
        .collect();

    let mut respawned = Vec::new();
    for id in pending {
        let Some(hero) = state.hero(id) else { continue };
        let spawn = hero.spawn;
        if !state.board.place_hero(id, spawn) {
            continue;
        }
        let lane = BoardState::lane_of(spawn.col).unwrap_or(0);
        let Some(hero) = state.hero_mut(id) else {
            continue;
        };
        hero.revive();
        hero.position = Some(spawn);
        hero.lane = lane;
        respawned.push(id);
    }
    respawned
}
