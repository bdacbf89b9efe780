//! Single-step hero movement.

use crate::action::{ActionError, ActionOutcome, ActionTransition, acting_hero};
use crate::buff;
use crate::env::GameEnv;
use crate::state::{GameState, HeroId, MoveBlock, Position};

/// Moves the hero one tile in a cardinal direction. Stepping onto a buff
/// tile applies its boost; stepping off removes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveAction {
    pub hero: HeroId,
    pub d_row: i32,
    pub d_col: i32,
}

impl MoveAction {
    pub fn new(hero: HeroId, d_row: i32, d_col: i32) -> Self {
        Self { hero, d_row, d_col }
    }

    fn is_cardinal_step(&self) -> bool {
        (self.d_row.abs() + self.d_col.abs()) == 1
    }

    fn destination(&self, origin: Position) -> Position {
        origin.stepped(self.d_row, self.d_col)
    }
}

impl ActionTransition for MoveAction {
    fn actor(&self) -> HeroId {
        self.hero
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), ActionError> {
        let (_, origin) = acting_hero(state, self.hero)?;
        if !self.is_cardinal_step() {
            return Err(ActionError::InvalidStep);
        }

        let destination = self.destination(origin);
        state
            .board
            .validate_hero_move(origin, destination)
            .map_err(|block| match block {
                MoveBlock::OutOfBounds => ActionError::OutOfBounds(destination),
                MoveBlock::Inaccessible => ActionError::Inaccessible(destination),
                MoveBlock::HeroOccupied => ActionError::Occupied(destination),
                MoveBlock::LaneBlocked(monster) => ActionError::LaneBlocked(monster),
            })
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<ActionOutcome, ActionError> {
        let (_, origin) = acting_hero(state, self.hero)?;
        let destination = self.destination(origin);

        if !state.board.take_hero(self.hero, origin) {
            return Err(ActionError::OccupancyDesync(self.hero));
        }
        if !state.board.place_hero(self.hero, destination) {
            // Roll back so occupancy stays consistent with hero state.
            let _ = state.board.place_hero(self.hero, origin);
            return Err(ActionError::Occupied(destination));
        }

        let terrain = state
            .board
            .tile(destination)
            .map(|tile| tile.terrain())
            .ok_or(ActionError::OutOfBounds(destination))?;

        let hero = state
            .hero_mut(self.hero)
            .ok_or(ActionError::HeroNotFound(self.hero))?;
        hero.position = Some(destination);
        buff::apply(hero, terrain);

        Ok(ActionOutcome::Moved { to: destination })
    }
}
