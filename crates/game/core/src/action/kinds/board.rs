//! Obstacle removal and turn passing.

use crate::action::{ActionError, ActionOutcome, ActionTransition, acting_hero};
use crate::env::GameEnv;
use crate::state::{GameState, HeroId, Position, TerrainKind};

/// Spends the turn removing an obstacle on an adjacent tile, opening the
/// lane for later moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClearObstacleAction {
    pub hero: HeroId,
    pub d_row: i32,
    pub d_col: i32,
}

impl ClearObstacleAction {
    pub fn new(hero: HeroId, d_row: i32, d_col: i32) -> Self {
        Self { hero, d_row, d_col }
    }

    fn target(&self, origin: Position) -> Position {
        origin.stepped(self.d_row, self.d_col)
    }
}

impl ActionTransition for ClearObstacleAction {
    fn actor(&self) -> HeroId {
        self.hero
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), ActionError> {
        let (_, origin) = acting_hero(state, self.hero)?;
        let target = self.target(origin);
        if origin.chebyshev(target) != 1 {
            return Err(ActionError::InvalidStep);
        }
        match state.board.tile(target).map(|tile| tile.terrain()) {
            Some(TerrainKind::Obstacle) => Ok(()),
            Some(_) => Err(ActionError::NoObstacle(target)),
            None => Err(ActionError::OutOfBounds(target)),
        }
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<ActionOutcome, ActionError> {
        self.pre_validate(state, env)?;
        let (_, origin) = acting_hero(state, self.hero)?;
        let target = self.target(origin);
        if !state.board.clear_obstacle(target) {
            return Err(ActionError::NoObstacle(target));
        }
        Ok(ActionOutcome::ClearedObstacle { at: target })
    }
}

/// Explicitly forfeits the turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PassAction {
    pub hero: HeroId,
}

impl PassAction {
    pub fn new(hero: HeroId) -> Self {
        Self { hero }
    }
}

impl ActionTransition for PassAction {
    fn actor(&self) -> HeroId {
        self.hero
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), ActionError> {
        acting_hero(state, self.hero)?;
        Ok(())
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<ActionOutcome, ActionError> {
        acting_hero(state, self.hero)?;
        Ok(ActionOutcome::Passed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::kinds::movement::MoveAction;
    use crate::action::kinds::testkit::{self, TestCatalog};
    use crate::config::GameConfig;

    #[test]
    fn clearing_opens_the_tile() {
        let mut state = testkit::state_with_party();
        let config = GameConfig::default();
        let catalog = TestCatalog::standard();
        let env = testkit::env(&config, &catalog);

        let blocked = Position::new(6, 0);
        state.board.set_terrain_for_tests(blocked, TerrainKind::Obstacle);

        // The obstacle blocks movement until cleared.
        let step = MoveAction::new(HeroId(0), -1, 0);
        assert_eq!(
            step.pre_validate(&state, &env),
            Err(ActionError::Inaccessible(blocked))
        );

        let outcome = ClearObstacleAction::new(HeroId(0), -1, 0)
            .apply(&mut state, &env)
            .unwrap();
        assert_eq!(outcome, ActionOutcome::ClearedObstacle { at: blocked });
        assert_eq!(
            state.board.tile(blocked).unwrap().terrain(),
            TerrainKind::Plain
        );
        assert!(step.pre_validate(&state, &env).is_ok());
    }

    #[test]
    fn clearing_plain_ground_rejected() {
        let state = testkit::state_with_party();
        let config = GameConfig::default();
        let catalog = TestCatalog::standard();
        let env = testkit::env(&config, &catalog);

        let action = ClearObstacleAction::new(HeroId(0), -1, 0);
        assert_eq!(
            action.pre_validate(&state, &env),
            Err(ActionError::NoObstacle(Position::new(6, 0)))
        );
    }
}
