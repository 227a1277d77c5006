//! Application-wide constants.
//!
//! This module defines constants used throughout the application:
//! board dimensions, inventory layout, and the static item-size presets
//! offered by the inventory panel.

use crate::models::ItemSize;

/// The display name of the application (human-readable).
pub const APP_NAME: &str = "Unearth";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "unearth";

/// Default number of board rows.
pub const DEFAULT_BOARD_ROWS: usize = 5;

/// Default number of board columns.
pub const DEFAULT_BOARD_COLS: usize = 9;

/// Largest board the estimation service accepts, in rows.
pub const MAX_BOARD_ROWS: usize = 9;

/// Largest board the estimation service accepts, in columns.
pub const MAX_BOARD_COLS: usize = 9;

/// Number of independently configurable item slots in the inventory.
pub const ITEM_SLOTS: usize = 4;

/// Item-size presets in wide orientation, as (rows, cols) pairs.
pub const WIDE_ITEM_PRESETS: &[(usize, usize)] =
    &[(1, 2), (1, 3), (1, 4), (2, 2), (2, 3), (2, 4), (3, 3)];

/// Item-size presets in tall orientation, as (rows, cols) pairs.
pub const TALL_ITEM_PRESETS: &[(usize, usize)] = &[(2, 1), (3, 1), (3, 2), (3, 3)];

/// Builds the full preset list (wide followed by tall) as [`ItemSize`] values.
///
/// The preset tables hold only positive dimensions, so construction cannot
/// fail.
#[must_use]
pub fn item_size_presets() -> Vec<ItemSize> {
    WIDE_ITEM_PRESETS
        .iter()
        .chain(TALL_ITEM_PRESETS.iter())
        .map(|&(rows, cols)| ItemSize::new(rows, cols).expect("preset dimensions are positive"))
        .collect()
}
