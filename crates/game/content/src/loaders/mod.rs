//! Content loaders for reading game data from files.
//!
//! Catalogs live in RON, configuration in TOML. Each loader deserializes
//! straight into `valor-core` types and validates the result before
//! handing it to the runtime oracles.

pub mod config;
pub mod factory;
pub mod heroes;
pub mod items;
pub mod monsters;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use heroes::HeroLoader;
pub use items::ItemLoader;
pub use monsters::MonsterLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// A loaded catalog together with descriptions of the entries dropped.
///
/// Template data degrades gracefully: an invalid entry is skipped and
/// recorded here instead of failing the load. Unparseable files and
/// catalogs left empty after skipping still fail.
#[derive(Debug, Clone)]
pub struct Loaded<T> {
    pub entries: Vec<T>,
    pub skipped: Vec<String>,
}

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read file {}: {}", path.display(), e))
}
