//! Action validation and execution errors.

use crate::env::{ItemHandle, OracleError};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{HeroId, MonsterId, Position};

/// Errors raised while validating or applying a hero action.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("hero {0} not found")]
    HeroNotFound(HeroId),

    #[error("hero {0} is fainted")]
    HeroFainted(HeroId),

    #[error("hero {0} is not on the board")]
    HeroOffBoard(HeroId),

    #[error("monster {0} not found")]
    TargetNotFound(MonsterId),

    #[error("target at {target} is out of range from {origin}")]
    OutOfRange { origin: Position, target: Position },

    #[error("moves must be a single cardinal step")]
    InvalidStep,

    #[error("destination {0} is out of bounds")]
    OutOfBounds(Position),

    #[error("destination {0} is inaccessible")]
    Inaccessible(Position),

    #[error("destination {0} is occupied by another hero")]
    Occupied(Position),

    #[error("monster {0} holds the lane; the hero cannot move past it")]
    LaneBlocked(MonsterId),

    #[error("{0} is not in the inventory")]
    ItemNotInInventory(ItemHandle),

    #[error("{0} cannot be used that way")]
    WrongItemKind(ItemHandle),

    #[error("level {required} required, hero is level {actual}")]
    LevelTooLow { required: u32, actual: u32 },

    #[error("not enough mana: {required} required, {available} available")]
    InsufficientMana { required: u32, available: u32 },

    #[error("teleport target must stand in a different lane")]
    TeleportSameLane,

    #[error("a hero cannot teleport to itself")]
    TeleportSelf,

    #[error("no free tile beside the teleport target")]
    NoTeleportDestination,

    #[error("no obstacle at {0}")]
    NoObstacle(Position),

    #[error("board occupancy desynced for hero {0}")]
    OccupancyDesync(HeroId),

    #[error("board occupancy desynced for monster {0}")]
    MonsterOccupancyDesync(MonsterId),

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        use ActionError::*;
        match self {
            HeroNotFound(_) | TargetNotFound(_) => ErrorSeverity::Validation,
            HeroFainted(_) | HeroOffBoard(_) => ErrorSeverity::Validation,
            OutOfRange { .. } | InvalidStep | OutOfBounds(_) => ErrorSeverity::Validation,
            Inaccessible(_) | Occupied(_) | LaneBlocked(_) => ErrorSeverity::Recoverable,
            ItemNotInInventory(_) | WrongItemKind(_) => ErrorSeverity::Validation,
            LevelTooLow { .. } | InsufficientMana { .. } => ErrorSeverity::Recoverable,
            TeleportSameLane | TeleportSelf | NoTeleportDestination => ErrorSeverity::Recoverable,
            NoObstacle(_) => ErrorSeverity::Validation,
            OccupancyDesync(_) | MonsterOccupancyDesync(_) => ErrorSeverity::Internal,
            Oracle(inner) => inner.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        use ActionError::*;
        match self {
            HeroNotFound(_) => "ACTION_HERO_NOT_FOUND",
            HeroFainted(_) => "ACTION_HERO_FAINTED",
            HeroOffBoard(_) => "ACTION_HERO_OFF_BOARD",
            TargetNotFound(_) => "ACTION_TARGET_NOT_FOUND",
            OutOfRange { .. } => "ACTION_OUT_OF_RANGE",
            InvalidStep => "ACTION_INVALID_STEP",
            OutOfBounds(_) => "ACTION_OUT_OF_BOUNDS",
            Inaccessible(_) => "ACTION_INACCESSIBLE",
            Occupied(_) => "ACTION_OCCUPIED",
            LaneBlocked(_) => "ACTION_LANE_BLOCKED",
            ItemNotInInventory(_) => "ACTION_ITEM_NOT_IN_INVENTORY",
            WrongItemKind(_) => "ACTION_WRONG_ITEM_KIND",
            LevelTooLow { .. } => "ACTION_LEVEL_TOO_LOW",
            InsufficientMana { .. } => "ACTION_INSUFFICIENT_MANA",
            TeleportSameLane => "ACTION_TELEPORT_SAME_LANE",
            TeleportSelf => "ACTION_TELEPORT_SELF",
            NoTeleportDestination => "ACTION_NO_TELEPORT_DESTINATION",
            NoObstacle(_) => "ACTION_NO_OBSTACLE",
            OccupancyDesync(_) => "ACTION_OCCUPANCY_DESYNC",
            MonsterOccupancyDesync(_) => "ACTION_MONSTER_OCCUPANCY_DESYNC",
            Oracle(inner) => inner.error_code(),
        }
    }
}
