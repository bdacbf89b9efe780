//! Deterministic rules engine for the lane-grid tactical combat mode.
//!
//! `valor-core` defines the canonical simulation: combatant state, the
//! three-lane board, terrain buffs, combat resolution, and the round
//! controller. All state mutation flows through [`engine::GameEngine`];
//! external data (hero/monster/item templates, randomness) arrives through
//! the oracle traits in [`env`]. The crate performs no I/O and emits no
//! logs, so embedding layers can replay any session from a seed.
pub mod action;
pub mod buff;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use action::{ActionError, ActionOutcome, ActionReport, ActionTransition, HeroAction};
pub use combat::{AttackOutcome, CombatReport, KillReward};
pub use config::GameConfig;
pub use engine::{
    ExecuteError, GameEngine, MonsterEvent, RoundReport, TurnError, Victory,
};
pub use env::{
    ArmorData, Env, GameEnv, HeroArchetype, HeroOracle, HeroTemplate, ItemDefinition, ItemHandle,
    ItemKind, ItemOracle, MonsterCategory, MonsterOracle, MonsterTemplate, OracleError, PcgRng,
    PotionData, PotionEffect, RngOracle, SpellData, SpellElement, WeaponData, compute_seed,
};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    Attribute, AttributeBlock, BoardState, Equipment, GameState, HeroId, HeroState,
    InventoryState, MonsterId, MonsterState, Position, ResourceMeter, RoundPhase, TerrainKind,
    Tile, TurnState,
};
