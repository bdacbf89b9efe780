//! Hero template catalog loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use valor_core::HeroTemplate;

use crate::loaders::{LoadResult, Loaded, read_file};

/// Hero catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroCatalog {
    pub heroes: Vec<HeroTemplate>,
}

/// Loader for the hero template catalog from RON files.
pub struct HeroLoader;

impl HeroLoader {
    /// Loads hero templates from a RON file. Party assembly addresses
    /// heroes by name, so nameless and duplicate-name entries are skipped.
    /// A catalog with no usable entries fails the load.
    pub fn load(path: &Path) -> LoadResult<Loaded<HeroTemplate>> {
        let content = read_file(path)?;
        let catalog: HeroCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("failed to parse hero catalog RON: {}", e))?;

        let mut entries: Vec<HeroTemplate> = Vec::new();
        let mut skipped = Vec::new();
        for (index, template) in catalog.heroes.into_iter().enumerate() {
            if template.name.is_empty() {
                skipped.push(format!("hero template #{index} has an empty name"));
                continue;
            }
            if entries.iter().any(|earlier| earlier.name == template.name) {
                skipped.push(format!("duplicate hero template name '{}'", template.name));
                continue;
            }
            entries.push(template);
        }

        if entries.is_empty() {
            anyhow::bail!("hero catalog {} has no usable entries", path.display());
        }
        Ok(Loaded { entries, skipped })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_catalog(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_valid_catalog() {
        let file = write_catalog(
            r#"(heroes: [
                (name: "Gaerdal Ironhand", archetype: Warrior, mana: 100,
                 strength: 700, dexterity: 500, agility: 600, gold: 1354),
                (name: "Rillifane Rallathil", archetype: Sorcerer, mana: 1300,
                 strength: 750, dexterity: 500, agility: 450, gold: 2500),
            ])"#,
        );
        let loaded = HeroLoader::load(file.path()).unwrap();
        assert_eq!(loaded.entries.len(), 2);
        assert!(loaded.skipped.is_empty());
        assert_eq!(loaded.entries[0].name, "Gaerdal Ironhand");
        assert_eq!(loaded.entries[1].mana, 1300);
    }

    #[test]
    fn skips_duplicate_names_keeping_the_first() {
        let file = write_catalog(
            r#"(heroes: [
                (name: "Twin", archetype: Warrior, mana: 100,
                 strength: 700, dexterity: 500, agility: 600, gold: 0),
                (name: "Twin", archetype: Paladin, mana: 300,
                 strength: 750, dexterity: 650, agility: 600, gold: 0),
            ])"#,
        );
        let loaded = HeroLoader::load(file.path()).unwrap();
        assert_eq!(loaded.entries.len(), 1);
        assert_eq!(loaded.entries[0].archetype, valor_core::HeroArchetype::Warrior);
        assert_eq!(loaded.skipped.len(), 1);
        assert!(loaded.skipped[0].contains("duplicate"));
    }

    #[test]
    fn rejects_catalog_with_no_usable_entries() {
        let file = write_catalog("(heroes: [])");
        assert!(HeroLoader::load(file.path()).is_err());
    }

    #[test]
    fn rejects_unparseable_file() {
        let file = write_catalog("(heroes: [(name: ]");
        assert!(HeroLoader::load(file.path()).is_err());
    }
}
