//! Estimation results received from the service.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::grid::Grid;
use super::rgb::Rgb;

/// One estimated cell: the metric value and the heat-map color the service
/// chose for it. Wire form `[value, [r, g, b]]`.
pub type CellReading = (f64, Rgb);

/// Per-cell probability and entropy fields for one estimation request.
///
/// Immutable once received; the displayed result is only ever replaced or
/// cleared, never edited in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceResult {
    /// Probability of an item occupying each cell.
    pub probabilities: Grid<CellReading>,
    /// Entropy of the occupancy estimate for each cell.
    pub entropy: Grid<CellReading>,
}

impl InferenceResult {
    /// Checks that both fields match the board dimensions the request was
    /// made with, and that their row data is well formed.
    ///
    /// A response that fails this check is a service contract violation and
    /// is rejected before any cell of it is read.
    ///
    /// # Errors
    ///
    /// Fails when either grid's declared or actual shape differs from
    /// `rows` × `cols`.
    pub fn ensure_dimensions(&self, rows: usize, cols: usize) -> Result<()> {
        for (name, grid) in [
            ("probabilities", &self.probabilities),
            ("entropy", &self.entropy),
        ] {
            if grid.rows() != rows || grid.cols() != cols {
                anyhow::bail!(
                    "Malformed response: {name} field is {}x{}, expected {rows}x{cols}",
                    grid.rows(),
                    grid.cols(),
                );
            }
            if !grid.is_well_formed() {
                anyhow::bail!("Malformed response: {name} field has ragged row data");
            }
        }
        Ok(())
    }
}
