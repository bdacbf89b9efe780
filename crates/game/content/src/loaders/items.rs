//! Item catalog loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use valor_core::ItemDefinition;

use crate::loaders::{LoadResult, Loaded, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<ItemDefinition>,
}

/// Loader for the item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Loads item definitions from a RON file. Handles are the only way
    /// state refers back to an item, so a redefined handle keeps its first
    /// definition and later ones are skipped. An empty catalog is valid:
    /// heroes simply fight bare-handed.
    pub fn load(path: &Path) -> LoadResult<Loaded<ItemDefinition>> {
        let content = read_file(path)?;
        let catalog: ItemCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("failed to parse item catalog RON: {}", e))?;

        let mut entries: Vec<ItemDefinition> = Vec::new();
        let mut skipped = Vec::new();
        for item in catalog.items {
            if entries.iter().any(|earlier| earlier.handle == item.handle) {
                skipped.push(format!(
                    "duplicate item handle {} ('{}')",
                    item.handle, item.name
                ));
                continue;
            }
            entries.push(item);
        }

        Ok(Loaded { entries, skipped })
    }
}
