use crate::env::ItemHandle;

/// Equipped weapon and armor slots. Each slot is exclusively owned: the
/// handle lives here or in the inventory, never both.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    weapon: Option<ItemHandle>,
    armor: Option<ItemHandle>,
}

impl Equipment {
    pub const fn weapon(&self) -> Option<ItemHandle> {
        self.weapon
    }

    pub const fn armor(&self) -> Option<ItemHandle> {
        self.armor
    }

    /// Equips a weapon, returning the previously equipped one (which the
    /// caller must put back into the inventory).
    pub fn equip_weapon(&mut self, handle: ItemHandle) -> Option<ItemHandle> {
        self.weapon.replace(handle)
    }

    /// Equips armor, returning the previously equipped piece.
    pub fn equip_armor(&mut self, handle: ItemHandle) -> Option<ItemHandle> {
        self.armor.replace(handle)
    }
}
