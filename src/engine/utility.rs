//! Per-cell utilities.

use crate::grid::{Coord, Grid};
use crate::payoff::PayoffTable;

/// Utilities for every cell of a grid, recomputed each iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct UtilityField {
    /// Number of rows.
    rows: usize,
    /// Number of columns.
    cols: usize,
    /// Values in row-major order.
    values: Vec<f64>,
}

impl UtilityField {
    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Raw values in row-major order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Utility of the cell at `coord`.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<f64> {
        (coord.row < self.rows && coord.col < self.cols)
            .then(|| self.values[coord.row * self.cols + coord.col])
    }

    #[inline]
    pub(crate) fn at(&self, coord: Coord) -> f64 {
        self.values[coord.row * self.cols + coord.col]
    }
}

/// Sum each cell's payoffs against all of its Moore neighbors.
///
/// Sums are raw: edge and corner cells have fewer neighbors and are not
/// normalized.
#[must_use]
pub fn compute_utilities(grid: &Grid, payoffs: &PayoffTable) -> UtilityField {
    let (rows, cols) = (grid.rows(), grid.cols());

    let values: Vec<f64> = grid
        .iter()
        .map(|(coord, own)| {
            let (adjacent, count) = coord.neighbors(rows, cols);
            adjacent[..count as usize]
                .iter()
                .map(|&n| payoffs.payoff(own, grid[n]))
                .sum::<f64>()
        })
        .collect();

    UtilityField { rows, cols, values }
}
