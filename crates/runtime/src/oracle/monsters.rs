use valor_core::{MonsterOracle, MonsterTemplate};

/// Immutable monster template catalog backing the [`MonsterOracle`] trait.
#[derive(Debug)]
pub struct MonsterCatalog {
    templates: Vec<MonsterTemplate>,
}

impl MonsterCatalog {
    pub fn new(templates: Vec<MonsterTemplate>) -> Self {
        Self { templates }
    }
}

impl MonsterOracle for MonsterCatalog {
    fn all(&self) -> &[MonsterTemplate] {
        &self.templates
    }
}
