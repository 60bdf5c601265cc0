//! Pairwise payoffs between strategies.

use serde::{Deserialize, Serialize};

use crate::grid::Strategy;

/// Payoff received by a cell playing one strategy against a neighbor
/// playing another.
///
/// Entries are keyed by `(own, neighbor)` and need not be symmetric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayoffTable {
    /// `table[own][neighbor]`, indexed by strategy discriminant.
    table: [[f64; 2]; 2],
}

impl PayoffTable {
    /// Create a table from the four ordered-pair payoffs.
    ///
    /// The first strategy named is the cell's own, the second its neighbor's.
    #[must_use]
    pub const fn new(coop_coop: f64, coop_comp: f64, comp_coop: f64, comp_comp: f64) -> Self {
        Self {
            table: [[coop_coop, coop_comp], [comp_coop, comp_comp]],
        }
    }

    /// Payoff for playing `own` against a neighbor playing `neighbor`.
    #[must_use]
    #[inline]
    pub const fn payoff(&self, own: Strategy, neighbor: Strategy) -> f64 {
        self.table[own.index()][neighbor.index()]
    }

    /// True if every entry is a finite number.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.table.iter().flatten().all(|v| v.is_finite())
    }
}
