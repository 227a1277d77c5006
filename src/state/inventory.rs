//! Inventory store: the item sizes and counts the user expects on the board.

use crate::constants::{ITEM_SLOTS, WIDE_ITEM_PRESETS};
use crate::models::{ItemSetting, ItemSize, Rectangle};

/// An ordered, fixed-length sequence of item settings.
///
/// Slots are addressed by index. Out-of-range indices are a caller contract
/// violation and panic; the UI only ever iterates over valid slots. The
/// store performs no value validation of its own: any [`ItemSize`] is
/// accepted, whether or not it appears in the preset lists.
#[derive(Debug, Clone)]
pub struct ItemInventory {
    settings: Vec<ItemSetting>,
}

impl ItemInventory {
    /// Creates an inventory with `slots` settings, all counts zero.
    ///
    /// Initial sizes walk the wide preset list so each slot starts distinct.
    #[must_use]
    pub fn new(slots: usize) -> Self {
        let settings = (0..slots)
            .map(|i| {
                let (rows, cols) = WIDE_ITEM_PRESETS[i % WIDE_ITEM_PRESETS.len()];
                ItemSetting::new(ItemSize::new(rows, cols).expect("preset dimensions are positive"))
            })
            .collect();
        Self { settings }
    }

    /// Returns the number of slots.
    #[must_use]
    pub fn slots(&self) -> usize {
        self.settings.len()
    }

    /// Returns all settings in slot order.
    #[must_use]
    pub fn settings(&self) -> &[ItemSetting] {
        &self.settings
    }

    /// Returns the item size in the given slot.
    #[must_use]
    pub fn size(&self, index: usize) -> ItemSize {
        self.settings[index].size
    }

    /// Returns the item count in the given slot.
    #[must_use]
    pub fn count(&self, index: usize) -> usize {
        self.settings[index].count
    }

    /// Replaces the item size in the given slot.
    pub fn set_size(&mut self, index: usize, size: ItemSize) {
        self.settings[index].size = size;
    }

    /// Replaces the item count in the given slot.
    pub fn set_count(&mut self, index: usize, count: usize) {
        self.settings[index].count = count;
    }

    /// Sum of all counts across slots.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.settings.iter().map(|s| s.count).sum()
    }

    /// Flattens the settings into the rectangle list the service expects.
    ///
    /// Iterates slots in index order and emits `count` copies of each slot's
    /// size as a width/height rectangle. The order is deterministic but
    /// carries no meaning; the service treats the list as a multiset. Empty
    /// when all counts are zero.
    #[must_use]
    pub fn to_rectangles(&self) -> Vec<Rectangle> {
        self.settings
            .iter()
            .flat_map(|setting| {
                std::iter::repeat(setting.size.to_rectangle()).take(setting.count)
            })
            .collect()
    }
}

impl Default for ItemInventory {
    fn default() -> Self {
        Self::new(ITEM_SLOTS)
    }
}
