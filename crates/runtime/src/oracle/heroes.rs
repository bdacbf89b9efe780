use valor_core::{HeroOracle, HeroTemplate};

/// Immutable hero template catalog backing the [`HeroOracle`] trait.
#[derive(Debug)]
pub struct HeroCatalog {
    templates: Vec<HeroTemplate>,
}

impl HeroCatalog {
    pub fn new(templates: Vec<HeroTemplate>) -> Self {
        Self { templates }
    }
}

impl HeroOracle for HeroCatalog {
    fn all(&self) -> &[HeroTemplate] {
        &self.templates
    }
}
