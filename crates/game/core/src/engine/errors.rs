//! Engine-level errors: turn sequencing and the unified execution error.

use crate::action::ActionError;
use crate::env::OracleError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{HeroId, Victory};

/// Violations of the round state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    #[error("the session is over ({0:?} won)")]
    SessionOver(Victory),

    #[error("hero actions are only accepted during the hero phase")]
    NotHeroPhase,

    #[error("the round cannot finish while heroes are still acting")]
    HeroesStillActing,

    #[error("it is {expected}'s turn, not {actual}'s")]
    WrongHero { expected: HeroId, actual: HeroId },
}

impl GameError for TurnError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SessionOver(_) => ErrorSeverity::Validation,
            Self::NotHeroPhase | Self::HeroesStillActing => ErrorSeverity::Recoverable,
            Self::WrongHero { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::SessionOver(_) => "TURN_SESSION_OVER",
            Self::NotHeroPhase => "TURN_NOT_HERO_PHASE",
            Self::HeroesStillActing => "TURN_HEROES_STILL_ACTING",
            Self::WrongHero { .. } => "TURN_WRONG_HERO",
        }
    }
}

/// Any failure surfacing from [`crate::engine::GameEngine`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    #[error(transparent)]
    Turn(#[from] TurnError),

    #[error(transparent)]
    Action(#[from] ActionError),

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Turn(inner) => inner.severity(),
            Self::Action(inner) => inner.severity(),
            Self::Oracle(inner) => inner.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Turn(inner) => inner.error_code(),
            Self::Action(inner) => inner.error_code(),
            Self::Oracle(inner) => inner.error_code(),
        }
    }
}
