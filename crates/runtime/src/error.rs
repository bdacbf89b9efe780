//! Runtime error types.

use valor_core::ExecuteError;

/// Failures surfaced by session setup and execution.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("failed to load content: {0}")]
    Content(#[from] anyhow::Error),

    #[error("no hero template named '{0}'")]
    UnknownHero(String),

    #[error("a party needs between 1 and {max} heroes, got {got}")]
    InvalidPartySize { got: usize, max: usize },

    #[error("could not assemble the party: {0}")]
    PartySetup(&'static str),

    #[error("could not place the opening wave: {0}")]
    OpeningWave(&'static str),

    #[error(transparent)]
    Execute(#[from] ExecuteError),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
