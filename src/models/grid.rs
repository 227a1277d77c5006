//! Two-dimensional grids and board positions.
//!
//! [`Grid`] is the row-major container shared by the mask and the estimation
//! results, and its serialized layout (`rows`, `cols`, `data`) is the wire
//! format the estimation service speaks.

use serde::{Deserialize, Serialize};

/// A two-dimensional board position; `x` is the column, `y` is the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    x: usize,
    y: usize,
}

impl Position {
    /// Creates a new `Position`.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns the column of this position.
    #[must_use]
    pub const fn x(&self) -> usize {
        self.x
    }

    /// Returns the row of this position.
    #[must_use]
    pub const fn y(&self) -> usize {
        self.y
    }
}

/// A two-dimensional grid of values, stored row-major as `data[row][col]`.
///
/// Invariant: `data.len() == rows` and every row has exactly `cols`
/// elements. Values constructed through [`Grid::new`] always satisfy it;
/// values deserialized from the wire are checked with
/// [`Grid::is_well_formed`] before indexed access.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    data: Vec<Vec<T>>,
}

impl<T> Grid<T>
where
    T: Clone,
{
    /// Creates a new grid with every cell set to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use unearth::models::Grid;
    ///
    /// let grid = Grid::new(2, 3, false);
    /// assert_eq!(grid.rows(), 2);
    /// assert_eq!(grid.cols(), 3);
    /// assert_eq!(grid.get(1, 2), Some(&false));
    /// ```
    #[must_use]
    pub fn new(rows: usize, cols: usize, value: T) -> Self {
        Self {
            rows,
            cols,
            data: vec![vec![value; cols]; rows],
        }
    }
}

impl<T> Grid<T> {
    /// Returns the number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Returns a reference to the cell at (`row`, `col`), or `None` when the
    /// coordinates fall outside the grid.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.data.get(row)?.get(col)
    }

    /// Returns a mutable reference to the cell at (`row`, `col`), or `None`
    /// when the coordinates fall outside the grid.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.data.get_mut(row)?.get_mut(col)
    }

    /// Returns `true` when the stored data matches the declared dimensions.
    ///
    /// Grids built locally always do; this guards grids deserialized from an
    /// external response before any indexed access.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.data.len() == self.rows && self.data.iter().all(|row| row.len() == self.cols)
    }

    /// Iterates over all cells in row-major order as `(position, value)`.
    pub fn cells(&self) -> impl Iterator<Item = (Position, &T)> {
        self.data.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, value)| (Position::new(x, y), value))
        })
    }
}

impl<T: PartialEq> Grid<T> {
    /// Returns `true` if every cell equals `value`.
    #[must_use]
    pub fn all_eq(&self, value: &T) -> bool {
        self.data.iter().all(|row| row.iter().all(|v| v == value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_new() {
        let pos = Position::new(5, 6);
        assert_eq!(pos.x(), 5);
        assert_eq!(pos.y(), 6);
    }

    #[test]
    fn test_grid_new() {
        let grid = Grid::new(2, 3, 1.0_f64);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        for (_, value) in grid.cells() {
            assert_eq!(*value, 1.0);
        }
    }

    #[test]
    fn test_grid_get_out_of_bounds() {
        let grid = Grid::new(2, 2, true);
        assert_eq!(grid.get(0, 0), Some(&true));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 2), None);
    }

    #[test]
    fn test_grid_get_mut_updates_cell() {
        let mut grid = Grid::new(2, 2, false);
        *grid.get_mut(1, 0).unwrap() = true;
        assert_eq!(grid.get(1, 0), Some(&true));
        assert_eq!(grid.get(0, 0), Some(&false));
    }

    #[test]
    fn test_grid_all_eq() {
        let mut grid = Grid::new(2, 2, false);
        assert!(grid.all_eq(&false));
        *grid.get_mut(0, 1).unwrap() = true;
        assert!(!grid.all_eq(&false));
    }

    #[test]
    fn test_grid_well_formed_after_deserialization() {
        let grid: Grid<bool> =
            serde_json::from_str(r#"{"rows":2,"cols":2,"data":[[true,false],[false,true]]}"#)
                .unwrap();
        assert!(grid.is_well_formed());

        let ragged: Grid<bool> =
            serde_json::from_str(r#"{"rows":2,"cols":2,"data":[[true,false]]}"#).unwrap();
        assert!(!ragged.is_well_formed());
    }

    #[test]
    fn test_grid_serde_layout() {
        let grid = Grid::new(1, 2, false);
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, r#"{"rows":1,"cols":2,"data":[[false,false]]}"#);
    }

    #[test]
    fn test_cells_row_major_order() {
        let mut grid = Grid::new(2, 2, 0_usize);
        *grid.get_mut(0, 1).unwrap() = 1;
        *grid.get_mut(1, 0).unwrap() = 2;
        *grid.get_mut(1, 1).unwrap() = 3;
        let order: Vec<usize> = grid.cells().map(|(_, v)| *v).collect();
        assert_eq!(order, vec![0, 1, 2, 3]);
    }
}
