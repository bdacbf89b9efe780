//! Game engine: the single entry point for mutating state.
//!
//! [`GameEngine`] borrows the state exclusively and enforces the round
//! state machine: each living hero acts once per round in id order, then
//! [`GameEngine::finish_round`] runs the monster phase and the
//! housekeeping that follows it.

mod errors;
mod round;

pub use errors::{ExecuteError, TurnError};
pub use round::{MonsterEvent, RoundReport};

pub use crate::state::Victory;

use crate::action::{ActionReport, HeroAction};
use crate::env::GameEnv;
use crate::state::{GameState, HeroId, RoundPhase};

/// Executes actions against exclusively borrowed state.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// The hero whose action [`Self::execute`] expects next, if the hero
    /// phase is running.
    pub fn current_hero(&self) -> Option<HeroId> {
        match self.state.turn.phase {
            RoundPhase::Heroes if self.state.victory.is_none() => self.state.current_hero(),
            _ => None,
        }
    }

    /// Executes one hero action.
    ///
    /// Validates the round state machine (hero phase, correct hero), then
    /// runs the action's own validation and applies it. The nonce advances
    /// exactly once per executed action, including failed dodges. Victory
    /// is evaluated at round end, not here: a hero standing on the monster
    /// nexus must still survive the monster phase.
    pub fn execute(
        &mut self,
        action: HeroAction,
        env: &GameEnv<'_>,
    ) -> Result<ActionReport, ExecuteError> {
        if let Some(victory) = self.state.victory {
            return Err(TurnError::SessionOver(victory).into());
        }
        if self.state.turn.phase != RoundPhase::Heroes {
            return Err(TurnError::NotHeroPhase.into());
        }
        let expected = self.state.current_hero().ok_or(TurnError::NotHeroPhase)?;
        let actual = action.actor();
        if actual != expected {
            return Err(TurnError::WrongHero { expected, actual }.into());
        }

        action.pre_validate(self.state, env)?;
        let nonce = self.state.turn.nonce;
        let outcome = action.apply(self.state, env)?;
        self.state.turn.nonce = nonce + 1;

        // Advance to the next living hero; flip phases once all acted.
        self.state.turn.next_hero = expected.index() + 1;
        if self.state.current_hero().is_none() {
            self.state.turn.phase = RoundPhase::Monsters;
        }

        Ok(ActionReport {
            hero: expected,
            nonce,
            outcome,
        })
    }

    /// Finishes the round once every hero has acted: monsters attack or
    /// advance, survivors recover, spawn waves and respawns land, and the
    /// next round's hero phase opens.
    pub fn finish_round(&mut self, env: &GameEnv<'_>) -> Result<RoundReport, ExecuteError> {
        if let Some(victory) = self.state.victory {
            return Err(TurnError::SessionOver(victory).into());
        }
        if self.state.turn.phase != RoundPhase::Monsters {
            return Err(TurnError::HeroesStillActing.into());
        }
        round::finish(self.state, env)
    }
}
