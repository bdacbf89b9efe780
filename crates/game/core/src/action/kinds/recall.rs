//! Lane repositioning: teleport to an ally's lane or recall to spawn.

use crate::action::{ActionError, ActionOutcome, ActionTransition, acting_hero};
use crate::buff;
use crate::env::GameEnv;
use crate::state::{BoardState, GameState, HeroId, Position};

/// Teleports beside a hero in another lane. The landing tile is the first
/// free tile next to the target, in row-major order, never ahead of the
/// target's row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeleportAction {
    pub hero: HeroId,
    pub target: HeroId,
}

impl TeleportAction {
    pub fn new(hero: HeroId, target: HeroId) -> Self {
        Self { hero, target }
    }

    fn destination(&self, state: &GameState, target: Position) -> Option<Position> {
        let lane = BoardState::lane_of(target.col)?;
        for row in [target.row, target.row + 1] {
            for col in BoardState::lane_columns(lane) {
                let candidate = Position::new(row, col);
                if candidate == target {
                    continue;
                }
                let Some(tile) = state.board.tile(candidate) else {
                    continue;
                };
                if tile.is_accessible() && tile.hero().is_none() {
                    return Some(candidate);
                }
            }
        }
        None
    }
}

impl ActionTransition for TeleportAction {
    fn actor(&self) -> HeroId {
        self.hero
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), ActionError> {
        if self.hero == self.target {
            return Err(ActionError::TeleportSelf);
        }
        let (hero, _) = acting_hero(state, self.hero)?;
        let (target, target_position) = acting_hero(state, self.target)?;
        if hero.lane == target.lane {
            return Err(ActionError::TeleportSameLane);
        }
        self.destination(state, target_position)
            .map(|_| ())
            .ok_or(ActionError::NoTeleportDestination)
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<ActionOutcome, ActionError> {
        self.pre_validate(state, env)?;
        let (_, origin) = acting_hero(state, self.hero)?;
        let (target, target_position) = acting_hero(state, self.target)?;
        let lane = target.lane;
        let destination = self
            .destination(state, target_position)
            .ok_or(ActionError::NoTeleportDestination)?;

        relocate(state, self.hero, origin, destination, lane)?;
        Ok(ActionOutcome::Teleported { to: destination })
    }
}

/// Returns the hero to its spawn tile on the hero nexus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecallAction {
    pub hero: HeroId,
}

impl RecallAction {
    pub fn new(hero: HeroId) -> Self {
        Self { hero }
    }
}

impl ActionTransition for RecallAction {
    fn actor(&self) -> HeroId {
        self.hero
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), ActionError> {
        let (hero, position) = acting_hero(state, self.hero)?;
        if position == hero.spawn {
            // Already home; treat as an occupied destination.
            return Err(ActionError::Occupied(hero.spawn));
        }
        if state.board.hero_at(hero.spawn).is_some() {
            return Err(ActionError::Occupied(hero.spawn));
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<ActionOutcome, ActionError> {
        self.pre_validate(state, env)?;
        let (hero, origin) = acting_hero(state, self.hero)?;
        let spawn = hero.spawn;
        let lane = BoardState::lane_of(spawn.col).ok_or(ActionError::Inaccessible(spawn))?;

        relocate(state, self.hero, origin, spawn, lane)?;
        Ok(ActionOutcome::Recalled { to: spawn })
    }
}

/// Moves a hero between arbitrary tiles, keeping board occupancy, hero
/// position, lane, and terrain buff in sync.
fn relocate(
    state: &mut GameState,
    id: HeroId,
    origin: Position,
    destination: Position,
    lane: usize,
) -> Result<(), ActionError> {
    if !state.board.take_hero(id, origin) {
        return Err(ActionError::OccupancyDesync(id));
    }
    if !state.board.place_hero(id, destination) {
        let _ = state.board.place_hero(id, origin);
        return Err(ActionError::Occupied(destination));
    }

    let terrain = state
        .board
        .tile(destination)
        .map(|tile| tile.terrain())
        .ok_or(ActionError::OutOfBounds(destination))?;

    let hero = state.hero_mut(id).ok_or(ActionError::HeroNotFound(id))?;
    hero.position = Some(destination);
    hero.lane = lane;
    buff::apply(hero, terrain);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::kinds::movement::MoveAction;
    use crate::action::kinds::testkit::{self, TestCatalog};
    use crate::config::GameConfig;

    #[test]
    fn teleport_lands_beside_target_not_ahead() {
        let mut state = testkit::state_with_party();
        let config = GameConfig::default();
        let catalog = TestCatalog::standard();
        let env = testkit::env(&config, &catalog);

        // Push the lane-1 hero up the board a few rows.
        for _ in 0..3 {
            MoveAction::new(HeroId(1), -1, 0).apply(&mut state, &env).unwrap();
        }
        assert_eq!(state.party[1].position, Some(Position::new(4, 3)));

        let outcome = TeleportAction::new(HeroId(0), HeroId(1))
            .apply(&mut state, &env)
            .unwrap();
        // First candidate in row-major order: same row, other lane column.
        assert_eq!(outcome, ActionOutcome::Teleported { to: Position::new(4, 4) });
        let hero = &state.party[0];
        assert_eq!(hero.position, Some(Position::new(4, 4)));
        assert_eq!(hero.lane, 1);
        assert_eq!(state.board.hero_at(Position::new(7, 0)), None);
    }

    #[test]
    fn teleport_requires_another_lane() {
        let mut state = testkit::state_with_party();
        let config = GameConfig::default();
        let catalog = TestCatalog::standard();
        let env = testkit::env(&config, &catalog);

        // Bring both heroes into lane 1.
        TeleportAction::new(HeroId(0), HeroId(1))
            .apply(&mut state, &env)
            .unwrap();
        assert_eq!(
            TeleportAction::new(HeroId(0), HeroId(1)).pre_validate(&state, &env),
            Err(ActionError::TeleportSameLane)
        );
        assert_eq!(
            TeleportAction::new(HeroId(0), HeroId(0)).pre_validate(&state, &env),
            Err(ActionError::TeleportSelf)
        );
    }

    #[test]
    fn recall_returns_to_spawn() {
        let mut state = testkit::state_with_party();
        let config = GameConfig::default();
        let catalog = TestCatalog::standard();
        let env = testkit::env(&config, &catalog);

        MoveAction::new(HeroId(0), -1, 0).apply(&mut state, &env).unwrap();
        MoveAction::new(HeroId(0), -1, 0).apply(&mut state, &env).unwrap();

        let outcome = RecallAction::new(HeroId(0)).apply(&mut state, &env).unwrap();
        assert_eq!(outcome, ActionOutcome::Recalled { to: Position::new(7, 0) });
        assert_eq!(state.party[0].position, Some(Position::new(7, 0)));
        assert_eq!(state.party[0].lane, 0);
        assert_eq!(state.board.hero_at(Position::new(5, 0)), None);
    }

    #[test]
    fn recall_blocked_by_occupied_spawn() {
        let mut state = testkit::state_with_party();
        let config = GameConfig::default();
        let catalog = TestCatalog::standard();
        let env = testkit::env(&config, &catalog);

        // Hero 0 steps off its spawn, hero 1 teleports in beside it and
        // walks onto the freed spawn tile.
        MoveAction::new(HeroId(0), -1, 0).apply(&mut state, &env).unwrap();
        TeleportAction::new(HeroId(1), HeroId(0)).apply(&mut state, &env).unwrap();
        assert_eq!(state.party[1].position, Some(Position::new(6, 1)));
        MoveAction::new(HeroId(1), 1, 0).apply(&mut state, &env).unwrap();
        MoveAction::new(HeroId(1), 0, -1).apply(&mut state, &env).unwrap();
        assert_eq!(state.party[1].position, Some(Position::new(7, 0)));

        assert_eq!(
            RecallAction::new(HeroId(0)).pre_validate(&state, &env),
            Err(ActionError::Occupied(Position::new(7, 0)))
        );
    }
}
