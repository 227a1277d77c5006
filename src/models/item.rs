//! Item shapes: sizes as seen by the user, rectangles as sent on the wire.
//!
//! An [`ItemSize`] is the (rows, cols) footprint a user picks from the preset
//! list; a [`Rectangle`] is the width/height form the estimation service
//! expects. The inventory store flattens one into the other.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// The footprint of a buried item, in board rows and columns.
///
/// Immutable once constructed; both dimensions are positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemSize {
    rows: usize,
    cols: usize,
}

impl ItemSize {
    /// Creates a new `ItemSize`.
    ///
    /// # Errors
    ///
    /// Fails when either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            anyhow::bail!("Invalid item dimensions {rows}x{cols}: both must be positive");
        }
        Ok(Self { rows, cols })
    }

    /// Returns the number of rows this item covers.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns this item covers.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Human-readable label, e.g. `"2 × 3"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use unearth::models::ItemSize;
    ///
    /// let size = ItemSize::new(2, 3).unwrap();
    /// assert_eq!(size.label(), "2 × 3");
    /// ```
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} × {}", self.rows, self.cols)
    }

    /// Returns the same footprint in the other orientation.
    #[must_use]
    pub const fn transposed(&self) -> Self {
        Self {
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Converts the size to the wire-format rectangle.
    #[must_use]
    pub const fn to_rectangle(&self) -> Rectangle {
        Rectangle {
            width: self.cols,
            height: self.rows,
        }
    }
}

/// One inventory slot: an item size and how many of it are expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemSetting {
    /// The footprint of the item in this slot.
    pub size: ItemSize,
    /// How many items of this size are expected on the board.
    pub count: usize,
}

impl ItemSetting {
    /// Creates a new setting with a count of zero.
    #[must_use]
    pub const fn new(size: ItemSize) -> Self {
        Self { size, count: 0 }
    }
}

/// A rectangle to be placed on the board, in the service's width/height form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rectangle {
    width: usize,
    height: usize,
}

impl Rectangle {
    /// Creates a new `Rectangle`.
    #[must_use]
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Returns the width of this rectangle.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Returns the height of this rectangle.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Swaps the width and height of this rectangle.
    pub fn transpose(&mut self) {
        std::mem::swap(&mut self.width, &mut self.height);
    }

    /// Calculates the area of this rectangle.
    #[must_use]
    pub const fn area(&self) -> usize {
        self.width * self.height
    }
}
