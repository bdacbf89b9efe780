use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::env::ItemHandle;

/// Bounded item storage. Slots hold handles; definitions live in the
/// item catalog and are resolved through the item oracle.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryState {
    slots: ArrayVec<ItemHandle, { GameConfig::MAX_INVENTORY_SLOTS }>,
}

impl InventoryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.slots.is_full()
    }

    pub fn contains(&self, handle: ItemHandle) -> bool {
        self.slots.contains(&handle)
    }

    pub fn iter(&self) -> impl Iterator<Item = ItemHandle> + '_ {
        self.slots.iter().copied()
    }

    /// Adds an item. Returns false when the inventory is full.
    pub fn add(&mut self, handle: ItemHandle) -> bool {
        self.slots.try_push(handle).is_ok()
    }

    /// Removes one instance of `handle`. Returns false if absent.
    /// Slot order is preserved so display indices stay stable.
    pub fn remove(&mut self, handle: ItemHandle) -> bool {
        if let Some(index) = self.slots.iter().position(|slot| *slot == handle) {
            self.slots.remove(index);
            true
        } else {
            false
        }
    }
}
