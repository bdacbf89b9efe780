//! Authoritative game state representation.
//!
//! This module owns the data structures describing heroes, monsters, the
//! board, and turn bookkeeping. Embedding layers query this state freely
//! but mutate it exclusively through [`crate::engine::GameEngine`].
mod board;
mod common;
mod equipment;
mod hero;
mod inventory;
mod monster;

pub use board::{BoardState, MonsterAdvance, MoveBlock, TerrainKind, Tile};
pub use common::{Attribute, AttributeBlock, HeroId, MonsterId, Position, ResourceMeter};
pub use equipment::Equipment;
pub use hero::HeroState;
pub use inventory::InventoryState;
pub use monster::MonsterState;

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::env::{HeroTemplate, MonsterTemplate};

/// Terminal outcome of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Victory {
    /// A hero reached the monster nexus.
    Heroes,
    /// A monster reached the hero nexus.
    Monsters,
}

/// Phase within a round. Heroes always act before monsters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundPhase {
    /// Heroes act one by one in fixed id order.
    Heroes,
    /// All heroes have acted; the round is waiting to be finished.
    Monsters,
}

/// Turn bookkeeping for the round state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    /// Current round, starting at 1.
    pub round: u32,

    pub phase: RoundPhase,

    /// Party index of the next hero to act during the hero phase.
    pub next_hero: usize,

    /// Sequential action identifier, incremented on every executed action.
    /// Feeds per-event rng seeds, so replays are exact.
    pub nonce: u64,
}

impl TurnState {
    pub fn new() -> Self {
        Self {
            round: 1,
            phase: RoundPhase::Heroes,
            next_hero: 0,
            nonce: 0,
        }
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new()
    }
}

/// Canonical snapshot of the simulation state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// RNG seed fixed at session start; never modified afterwards.
    pub game_seed: u64,

    pub turn: TurnState,
    pub party: ArrayVec<HeroState, { GameConfig::MAX_PARTY }>,
    pub monsters: ArrayVec<MonsterState, { GameConfig::MAX_MONSTERS }>,
    pub board: BoardState,

    /// Set once a side has won; freezes the engine.
    pub victory: Option<Victory>,

    /// Sequential monster id allocator (monotonically increasing, never
    /// reused).
    next_monster_id: u32,
}

impl GameState {
    pub fn new(game_seed: u64, board: BoardState) -> Self {
        Self {
            game_seed,
            turn: TurnState::new(),
            party: ArrayVec::new(),
            monsters: ArrayVec::new(),
            board,
            victory: None,
            next_monster_id: 1,
        }
    }

    fn allocate_monster_id(&mut self) -> MonsterId {
        let id = MonsterId(self.next_monster_id);
        self.next_monster_id += 1;
        id
    }

    // ===== party =====

    /// Adds a hero to the party on the spawn tile of `lane` (the lane
    /// anchor on the hero nexus row). Hero ids follow party order.
    pub fn add_hero(&mut self, template: &HeroTemplate, lane: usize) -> Result<HeroId, &'static str> {
        if self.party.is_full() {
            return Err("party is full");
        }
        if lane >= GameConfig::LANE_COUNT {
            return Err("no such lane");
        }

        let id = HeroId(self.party.len() as u8);
        let spawn = Position::new(self.board.hero_nexus_row(), BoardState::lane_anchor(lane));
        if !self.board.place_hero(id, spawn) {
            return Err("spawn tile occupied");
        }

        let hero = HeroState::from_template(id, template, spawn, lane);
        self.party.push(hero);
        Ok(id)
    }

    pub fn hero(&self, id: HeroId) -> Option<&HeroState> {
        self.party.get(id.index())
    }

    pub fn hero_mut(&mut self, id: HeroId) -> Option<&mut HeroState> {
        self.party.get_mut(id.index())
    }

    /// Party index of the current hero (next living hero at or after
    /// `turn.next_hero`), or `None` when the hero phase is exhausted.
    pub fn current_hero(&self) -> Option<HeroId> {
        self.party
            .iter()
            .skip(self.turn.next_hero)
            .find(|hero| hero.is_alive() && hero.position.is_some())
            .map(|hero| hero.id)
    }

    pub fn highest_hero_level(&self) -> u32 {
        self.party.iter().map(|hero| hero.level).max().unwrap_or(1)
    }

    // ===== monster roster =====

    /// Creates a monster from a template and places it on the board.
    pub fn spawn_monster(
        &mut self,
        template: &MonsterTemplate,
        level: u32,
        position: Position,
    ) -> Result<MonsterId, &'static str> {
        if self.monsters.is_full() {
            return Err("monster roster is full");
        }

        let id = self.allocate_monster_id();
        if !self.board.place_monster(id, position) {
            // Roll the allocator back; the id was never observable.
            self.next_monster_id -= 1;
            return Err("spawn tile occupied");
        }

        self.monsters
            .push(MonsterState::from_template(id, template, level, position));
        Ok(id)
    }

    pub fn monster(&self, id: MonsterId) -> Option<&MonsterState> {
        self.monsters.iter().find(|monster| monster.id == id)
    }

    pub fn monster_mut(&mut self, id: MonsterId) -> Option<&mut MonsterState> {
        self.monsters.iter_mut().find(|monster| monster.id == id)
    }

    /// Removes a defeated monster from the roster (its tile must already
    /// be vacated through the board). Roster order is preserved.
    pub fn remove_monster(&mut self, id: MonsterId) -> Option<MonsterState> {
        let index = self
            .monsters
            .iter()
            .position(|monster| monster.id == id)?;
        Some(self.monsters.remove(index))
    }

    /// Stable-order snapshot of roster ids, for iteration while mutating.
    pub fn monster_ids(&self) -> Vec<MonsterId> {
        self.monsters.iter().map(|monster| monster.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{HeroArchetype, MonsterCategory, PcgRng};

    fn hero_template(name: &str) -> HeroTemplate {
        HeroTemplate {
            name: name.into(),
            archetype: HeroArchetype::Paladin,
            mana: 300,
            strength: 750,
            dexterity: 650,
            agility: 600,
            gold: 2500,
        }
    }

    fn monster_template() -> MonsterTemplate {
        MonsterTemplate {
            name: "Casper".into(),
            level: 1,
            damage: 100,
            defense: 200,
            dodge: 30,
            category: MonsterCategory::Spirit,
        }
    }

    fn state() -> GameState {
        let config = GameConfig::default();
        let board = BoardState::generate(&config, &PcgRng, 11);
        GameState::new(11, board)
    }

    #[test]
    fn heroes_spawn_on_their_lane_anchor() {
        let mut state = state();
        let id = state.add_hero(&hero_template("Alpha"), 0).unwrap();
        assert_eq!(id, HeroId(0));
        let hero = state.hero(id).unwrap();
        assert_eq!(hero.spawn, Position::new(7, 0));
        assert_eq!(state.board.hero_at(hero.spawn), Some(id));

        // A second hero cannot spawn on the same lane tile.
        assert!(state.add_hero(&hero_template("Beta"), 0).is_err());
        assert!(state.add_hero(&hero_template("Beta"), 1).is_ok());
    }

    #[test]
    fn monster_ids_never_reused() {
        let mut state = state();
        let a = state
            .spawn_monster(&monster_template(), 1, Position::new(0, 0))
            .unwrap();
        state.board.take_monster(a, Position::new(0, 0));
        state.remove_monster(a);
        let b = state
            .spawn_monster(&monster_template(), 1, Position::new(0, 0))
            .unwrap();
        assert_ne!(a, b);
        assert!(b.0 > a.0);
    }

    #[test]
    fn current_hero_skips_fainted() {
        let mut state = state();
        state.add_hero(&hero_template("Alpha"), 0).unwrap();
        state.add_hero(&hero_template("Beta"), 1).unwrap();
        state.party[0].take_damage(1000);
        assert_eq!(state.current_hero(), Some(HeroId(1)));
    }
}
