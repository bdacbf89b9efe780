use valor_core::{ItemDefinition, ItemHandle, ItemOracle};

/// Immutable item catalog backing the [`ItemOracle`] trait.
///
/// Lookup is linear; catalogs are small and resolved handles are not on a
/// hot path.
#[derive(Debug)]
pub struct ItemCatalog {
    items: Vec<ItemDefinition>,
}

impl ItemCatalog {
    pub fn new(items: Vec<ItemDefinition>) -> Self {
        Self { items }
    }
}

impl ItemOracle for ItemCatalog {
    fn definition(&self, handle: ItemHandle) -> Option<&ItemDefinition> {
        self.items.iter().find(|item| item.handle == handle)
    }

    fn all(&self) -> &[ItemDefinition] {
        &self.items
    }
}
