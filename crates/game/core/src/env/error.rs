use super::ItemHandle;
use crate::error::{ErrorSeverity, GameError};

/// Errors raised when a required oracle is missing or returns no data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    #[error("hero template oracle not available")]
    HeroesNotAvailable,

    #[error("monster template oracle not available")]
    MonstersNotAvailable,

    #[error("item definition oracle not available")]
    ItemsNotAvailable,

    #[error("rng oracle not available")]
    RngNotAvailable,

    /// An item handle present in game state has no definition. State and
    /// catalog have diverged; this is a bug, not a caller mistake.
    #[error("no definition for item handle {0}")]
    UnknownItem(ItemHandle),

    #[error("monster catalog is empty")]
    NoMonsterTemplates,
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownItem(_) => ErrorSeverity::Internal,
            _ => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::HeroesNotAvailable => "ORACLE_HEROES_NOT_AVAILABLE",
            Self::MonstersNotAvailable => "ORACLE_MONSTERS_NOT_AVAILABLE",
            Self::ItemsNotAvailable => "ORACLE_ITEMS_NOT_AVAILABLE",
            Self::RngNotAvailable => "ORACLE_RNG_NOT_AVAILABLE",
            Self::UnknownItem(_) => "ORACLE_UNKNOWN_ITEM",
            Self::NoMonsterTemplates => "ORACLE_NO_MONSTER_TEMPLATES",
        }
    }
}
