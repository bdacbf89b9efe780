//! Monster template catalog loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use valor_core::MonsterTemplate;

use crate::loaders::{LoadResult, Loaded, read_file};

/// Monster catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonsterCatalog {
    pub monsters: Vec<MonsterTemplate>,
}

/// Loader for the monster template catalog from RON files.
pub struct MonsterLoader;

impl MonsterLoader {
    /// Loads monster templates from a RON file. Raw dodge values are
    /// percentages; entries outside 0-100 are skipped. Spawn waves need
    /// something to pick from, so an empty result fails the load.
    pub fn load(path: &Path) -> LoadResult<Loaded<MonsterTemplate>> {
        let content = read_file(path)?;
        let catalog: MonsterCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("failed to parse monster catalog RON: {}", e))?;

        let mut entries = Vec::new();
        let mut skipped = Vec::new();
        for (index, template) in catalog.monsters.into_iter().enumerate() {
            if template.name.is_empty() {
                skipped.push(format!("monster template #{index} has an empty name"));
                continue;
            }
            if template.dodge > 100 {
                skipped.push(format!(
                    "monster '{}' has dodge {} (must be 0-100)",
                    template.name, template.dodge
                ));
                continue;
            }
            entries.push(template);
        }

        if entries.is_empty() {
            anyhow::bail!("monster catalog {} has no usable entries", path.display());
        }
        Ok(Loaded { entries, skipped })
    }
}
