//! Runtime wrappers around static game content.
//!
//! These implementations expose the `valor-core` oracle traits and bundle
//! them into an [`OracleManager`] so the session can build
//! [`valor_core::Env`] snapshots on demand. The data is immutable at
//! runtime; dynamic state lives in [`valor_core::GameState`].
mod heroes;
mod items;
mod monsters;

use std::sync::Arc;

use valor_content::ContentFactory;
use valor_core::{Env, GameConfig, GameEnv, PcgRng};

use crate::error::RuntimeError;

pub use heroes::HeroCatalog;
pub use items::ItemCatalog;
pub use monsters::MonsterCatalog;

/// Manages all oracle implementations and provides unified access.
#[derive(Clone, Debug)]
pub struct OracleManager {
    config: GameConfig,
    heroes: Arc<HeroCatalog>,
    monsters: Arc<MonsterCatalog>,
    items: Arc<ItemCatalog>,
    rng: PcgRng,
}

impl OracleManager {
    pub fn new(
        config: GameConfig,
        heroes: Arc<HeroCatalog>,
        monsters: Arc<MonsterCatalog>,
        items: Arc<ItemCatalog>,
    ) -> Self {
        Self {
            config,
            heroes,
            monsters,
            items,
            rng: PcgRng, // stateless
        }
    }

    /// Loads every catalog plus the configuration from a data directory.
    /// Entries the loaders skipped are reported here and the session runs
    /// on the remainder.
    pub fn from_content(factory: &ContentFactory) -> Result<Self, RuntimeError> {
        let config = factory.load_config()?;
        let heroes = Self::keep(factory.load_heroes()?, "heroes");
        let monsters = Self::keep(factory.load_monsters()?, "monsters");
        let items = Self::keep(factory.load_items()?, "items");
        Ok(Self::new(
            config,
            Arc::new(HeroCatalog::new(heroes)),
            Arc::new(MonsterCatalog::new(monsters)),
            Arc::new(ItemCatalog::new(items)),
        ))
    }

    fn keep<T>(loaded: valor_content::Loaded<T>, catalog: &'static str) -> Vec<T> {
        for reason in &loaded.skipped {
            tracing::warn!(catalog, %reason, "skipped catalog entry");
        }
        loaded.entries
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn heroes(&self) -> &HeroCatalog {
        &self.heroes
    }

    pub fn items(&self) -> &ItemCatalog {
        &self.items
    }

    /// Builds a core environment borrowing this manager's catalogs.
    pub fn env(&self) -> GameEnv<'_> {
        Env::with_all(
            &self.config,
            self.heroes.as_ref(),
            self.monsters.as_ref(),
            self.items.as_ref(),
            &self.rng,
        )
        .as_game_env()
    }
}
