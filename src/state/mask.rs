//! Mask store: which board cells are still buried.

use crate::models::Grid;

/// Owns the board size and the per-cell mask.
///
/// `true` marks a buried (unopened) cell. The grid dimensions always match
/// the declared board size; any resize rebuilds the whole grid.
#[derive(Debug, Clone)]
pub struct MaskBoard {
    mask: Grid<bool>,
}

impl MaskBoard {
    /// Creates a board of the given size with every cell unburied.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            mask: Grid::new(rows, cols, false),
        }
    }

    /// Returns the number of board rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.mask.rows()
    }

    /// Returns the number of board columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.mask.cols()
    }

    /// Returns the mask grid, for request assembly.
    #[must_use]
    pub const fn mask(&self) -> &Grid<bool> {
        &self.mask
    }

    /// Returns whether the cell at column `x`, row `y` is buried.
    ///
    /// Out-of-range coordinates read as not buried.
    #[must_use]
    pub fn is_buried(&self, x: usize, y: usize) -> bool {
        self.mask.get(y, x).copied().unwrap_or(false)
    }

    /// Toggles the buried state of the cell at column `x`, row `y`.
    ///
    /// Out-of-range coordinates are a silent no-op. Caller-side coordinate
    /// math should never produce them, but the store tolerates them rather
    /// than erroring.
    pub fn flip(&mut self, x: usize, y: usize) {
        if let Some(cell) = self.mask.get_mut(y, x) {
            *cell = !*cell;
        }
    }

    /// Replaces the mask with a fresh all-unburied grid of the current size.
    pub fn reset(&mut self) {
        self.mask = Grid::new(self.rows(), self.cols(), false);
    }

    /// Rebuilds the board at a new size, all cells unburied.
    ///
    /// Partial resizes are not supported; the whole grid is always rebuilt.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.mask = Grid::new(rows, cols, false);
    }

    /// Returns `true` when no cell is buried, i.e. the board is fully open.
    ///
    /// This is the trigger that invalidates a stale estimation result: once
    /// the puzzle has been fully revealed there is nothing left to estimate.
    #[must_use]
    pub fn is_fully_revealed(&self) -> bool {
        self.mask.all_eq(&false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_fully_revealed() {
        let board = MaskBoard::new(5, 9);
        assert_eq!(board.rows(), 5);
        assert_eq!(board.cols(), 9);
        assert!(board.is_fully_revealed());
    }

    #[test]
    fn test_flip_is_its_own_inverse() {
        let mut board = MaskBoard::new(5, 9);
        board.flip(3, 2);
        assert!(board.is_buried(3, 2));
        assert!(!board.is_fully_revealed());
        board.flip(3, 2);
        assert!(!board.is_buried(3, 2));
        assert!(board.is_fully_revealed());
    }

    #[test]
    fn test_flip_out_of_range_is_noop() {
        let mut board = MaskBoard::new(5, 9);
        board.flip(9, 0);
        board.flip(0, 5);
        board.flip(100, 100);
        assert!(board.is_fully_revealed());
    }

    #[test]
    fn test_flip_addresses_column_then_row() {
        let mut board = MaskBoard::new(2, 3);
        // (x=2, y=0) is in range on a 2x3 board even though row 2 is not
        board.flip(2, 0);
        assert!(board.is_buried(2, 0));
        assert_eq!(board.mask().get(0, 2), Some(&true));
    }

    #[test]
    fn test_reset_reopens_everything() {
        let mut board = MaskBoard::new(5, 9);
        for x in 0..9 {
            for y in 0..5 {
                board.flip(x, y);
            }
        }
        assert!(!board.is_fully_revealed());
        board.reset();
        assert!(board.is_fully_revealed());
        assert_eq!(board.rows(), 5);
        assert_eq!(board.cols(), 9);
    }

    #[test]
    fn test_resize_rebuilds_grid() {
        let mut board = MaskBoard::new(5, 9);
        board.flip(0, 0);
        board.resize(3, 4);
        assert_eq!(board.rows(), 3);
        assert_eq!(board.cols(), 4);
        assert!(board.is_fully_revealed());
    }
}
