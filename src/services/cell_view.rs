//! Result-to-display mapping for board cells.
//!
//! Pure, stateless transformations from an optional estimation result plus
//! the current display mode to what one cell should show: a two-decimal
//! label, a background color, and a readable foreground. Nothing here
//! mutates state or panics on absent data; missing readings render as an
//! empty cell.

use crate::models::{CellReading, Grid, InferenceResult, Rgb, TextColor};
use crate::state::DisplayMode;

/// Display-ready description of one board cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CellView {
    /// Cell text; empty when no reading is available.
    pub label: String,
    /// Heat-map background; `None` leaves the terminal default.
    pub background: Option<Rgb>,
    /// Foreground chosen for contrast against `background`.
    pub text: TextColor,
}

impl CellView {
    /// The view of a cell with no reading: no label, no color, default text.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            label: String::new(),
            background: None,
            text: TextColor::default(),
        }
    }

    /// CSS form of the background, e.g. `"rgb(68, 1, 84)"`.
    #[must_use]
    pub fn css_background(&self) -> Option<String> {
        self.background.map(|color| color.css())
    }
}

/// Converts a flat row-major cell index into `(row, col)`.
///
/// `cols` must be positive; the caller supplies the board's known column
/// count.
#[must_use]
pub const fn index_to_row_col(index: usize, cols: usize) -> (usize, usize) {
    (index / cols, index % cols)
}

/// Selects the grid an estimation result shows in the given mode.
#[must_use]
pub const fn field_of(result: &InferenceResult, mode: DisplayMode) -> &Grid<CellReading> {
    match mode {
        DisplayMode::Entropy => &result.entropy,
        DisplayMode::Probability => &result.probabilities,
    }
}

/// Looks up the reading for one cell, if any.
///
/// Absent when there is no result or the coordinates fall outside the
/// result's grids; lookups are checked and never read out of bounds.
#[must_use]
pub fn reading_at(
    result: Option<&InferenceResult>,
    mode: DisplayMode,
    row: usize,
    col: usize,
) -> Option<&CellReading> {
    result.and_then(|r| field_of(r, mode).get(row, col))
}

/// Formats a reading's value with exactly two decimal places.
#[must_use]
pub fn label_of(reading: Option<&CellReading>) -> String {
    reading.map_or_else(String::new, |(value, _)| format!("{value:.2}"))
}

/// Builds the full display view for one cell.
#[must_use]
pub fn cell_view(
    result: Option<&InferenceResult>,
    mode: DisplayMode,
    row: usize,
    col: usize,
) -> CellView {
    match reading_at(result, mode, row, col) {
        Some(&(value, color)) => CellView {
            label: format!("{value:.2}"),
            background: Some(color),
            text: color.contrast_text(),
        },
        None => CellView::empty(),
    }
}
