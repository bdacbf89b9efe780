//! Hero action pipeline.
//!
//! Every state mutation a player can request is a struct implementing
//! [`ActionTransition`]: a read-only `pre_validate` against the current
//! state, then an `apply` that mutates it. [`HeroAction`] is the enum the
//! engine dispatches on; [`ActionOutcome`] is what it reports back.
//!
//! Module structure:
//! - `error`: the unified [`ActionError`]
//! - `kinds::movement`: single-step moves
//! - `kinds::combat`: physical attacks and spell casts
//! - `kinds::inventory`: potion use and equipment changes
//! - `kinds::recall`: teleport and recall repositioning
//! - `kinds::board`: obstacle clearing and passing

pub mod error;
pub mod kinds;

pub use error::ActionError;
pub use kinds::board::{ClearObstacleAction, PassAction};
pub use kinds::combat::{AttackAction, CastAction};
pub use kinds::inventory::{EquipAction, UsePotionAction};
pub use kinds::movement::MoveAction;
pub use kinds::recall::{RecallAction, TeleportAction};

use crate::combat::CombatReport;
use crate::env::{GameEnv, ItemHandle, PotionEffect};
use crate::state::{GameState, HeroId, HeroState, Position};

/// Defines how a concrete action variant mutates game state.
pub trait ActionTransition {
    /// The hero performing this action.
    fn actor(&self) -> HeroId;

    /// Validates pre-conditions against the state **before** mutation.
    fn pre_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), ActionError> {
        Ok(())
    }

    /// Applies the action by mutating the game state directly.
    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<ActionOutcome, ActionError>;
}

/// What an executed action did, for reports and logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    Moved {
        to: Position,
    },
    Attacked(CombatReport),
    Cast(CombatReport),
    DrankPotion {
        effect: PotionEffect,
        amount: u32,
    },
    Equipped {
        item: ItemHandle,
        replaced: Option<ItemHandle>,
    },
    Teleported {
        to: Position,
    },
    Recalled {
        to: Position,
    },
    ClearedObstacle {
        at: Position,
    },
    Passed,
}

/// One executed action with its bookkeeping, as returned by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionReport {
    pub hero: HeroId,
    /// Nonce the action executed under.
    pub nonce: u64,
    pub outcome: ActionOutcome,
}

/// All actions a hero can take on its turn. Each consumes the turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeroAction {
    Move(MoveAction),
    Attack(AttackAction),
    Cast(CastAction),
    UsePotion(UsePotionAction),
    Equip(EquipAction),
    Teleport(TeleportAction),
    Recall(RecallAction),
    ClearObstacle(ClearObstacleAction),
    Pass(PassAction),
}

impl HeroAction {
    pub fn actor(&self) -> HeroId {
        match self {
            Self::Move(action) => action.actor(),
            Self::Attack(action) => action.actor(),
            Self::Cast(action) => action.actor(),
            Self::UsePotion(action) => action.actor(),
            Self::Equip(action) => action.actor(),
            Self::Teleport(action) => action.actor(),
            Self::Recall(action) => action.actor(),
            Self::ClearObstacle(action) => action.actor(),
            Self::Pass(action) => action.actor(),
        }
    }

    pub fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), ActionError> {
        match self {
            Self::Move(action) => action.pre_validate(state, env),
            Self::Attack(action) => action.pre_validate(state, env),
            Self::Cast(action) => action.pre_validate(state, env),
            Self::UsePotion(action) => action.pre_validate(state, env),
            Self::Equip(action) => action.pre_validate(state, env),
            Self::Teleport(action) => action.pre_validate(state, env),
            Self::Recall(action) => action.pre_validate(state, env),
            Self::ClearObstacle(action) => action.pre_validate(state, env),
            Self::Pass(action) => action.pre_validate(state, env),
        }
    }

    pub fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
    ) -> Result<ActionOutcome, ActionError> {
        match self {
            Self::Move(action) => action.apply(state, env),
            Self::Attack(action) => action.apply(state, env),
            Self::Cast(action) => action.apply(state, env),
            Self::UsePotion(action) => action.apply(state, env),
            Self::Equip(action) => action.apply(state, env),
            Self::Teleport(action) => action.apply(state, env),
            Self::Recall(action) => action.apply(state, env),
            Self::ClearObstacle(action) => action.apply(state, env),
            Self::Pass(action) => action.apply(state, env),
        }
    }

    /// Snake_case name for logging.
    pub fn as_snake_case(&self) -> &'static str {
        match self {
            Self::Move(_) => "move",
            Self::Attack(_) => "attack",
            Self::Cast(_) => "cast",
            Self::UsePotion(_) => "use_potion",
            Self::Equip(_) => "equip",
            Self::Teleport(_) => "teleport",
            Self::Recall(_) => "recall",
            Self::ClearObstacle(_) => "clear_obstacle",
            Self::Pass(_) => "pass",
        }
    }
}

/// Shared lookup: the acting hero must exist, be alive, and stand on the
/// board.
pub(crate) fn acting_hero<'a>(
    state: &'a GameState,
    id: HeroId,
) -> Result<(&'a HeroState, Position), ActionError> {
    let hero = state.hero(id).ok_or(ActionError::HeroNotFound(id))?;
    if hero.is_fainted() {
        return Err(ActionError::HeroFainted(id));
    }
    let position = hero.position.ok_or(ActionError::HeroOffBoard(id))?;
    Ok((hero, position))
}
