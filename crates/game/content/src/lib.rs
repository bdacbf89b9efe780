//! Data-driven content definitions and loaders.
//!
//! This crate reads the static game data consumed by runtime oracles:
//! - Hero templates (RON)
//! - Monster templates (RON)
//! - Item catalog (RON)
//! - Game configuration (TOML)
//!
//! All loaders deserialize directly into `valor-core` types; content never
//! appears in game state, only behind oracle implementations.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, HeroLoader, ItemLoader, Loaded, MonsterLoader};
