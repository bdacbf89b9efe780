//! Content factory for building oracles from data files.

use std::path::{Path, PathBuf};

use crate::loaders::{ConfigLoader, HeroLoader, ItemLoader, LoadResult, Loaded, MonsterLoader};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── heroes.ron
/// ├── monsters.ron
/// └── items.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<valor_core::GameConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load hero templates from `heroes.ron`.
    pub fn load_heroes(&self) -> LoadResult<Loaded<valor_core::HeroTemplate>> {
        HeroLoader::load(&self.data_dir.join("heroes.ron"))
    }

    /// Load monster templates from `monsters.ron`.
    pub fn load_monsters(&self) -> LoadResult<Loaded<valor_core::MonsterTemplate>> {
        MonsterLoader::load(&self.data_dir.join("monsters.ron"))
    }

    /// Load the item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<Loaded<valor_core::ItemDefinition>> {
        ItemLoader::load(&self.data_dir.join("items.ron"))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
