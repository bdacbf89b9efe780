//! Game configuration loader.

use std::path::Path;

use valor_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads config from a TOML file. Missing fields fall back to the
    /// compiled defaults; the terrain distribution must fit in 100%.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        let config: GameConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("failed to parse config TOML: {}", e))?;
        Self::validate(&config)?;
        Ok(config)
    }

    fn validate(config: &GameConfig) -> LoadResult<()> {
        let terrain = config.bush_percent
            + config.cave_percent
            + config.koulou_percent
            + config.obstacle_percent;
        if terrain > 100 {
            anyhow::bail!("terrain distribution sums to {terrain}% (must be at most 100)");
        }
        if config.spawn_interval == 0 {
            anyhow::bail!("spawn_interval must be at least 1");
        }
        if config.recovery_divisor == 0 {
            anyhow::bail!("recovery_divisor must be at least 1");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_config_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"spawn_interval = 4\n").unwrap();
        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.spawn_interval, 4);
        assert_eq!(config.recovery_divisor, GameConfig::DEFAULT_RECOVERY_DIVISOR);
        assert_eq!(config.bush_percent, 20);
    }

    #[test]
    fn rejects_overfull_terrain_distribution() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"bush_percent = 60\ncave_percent = 60\n").unwrap();
        assert!(ConfigLoader::load(file.path()).is_err());
    }
}
