//! Visited-configuration history and cycle detection.

use crate::grid::Grid;

/// Every grid configuration observed during a run, oldest first.
///
/// Append-only: snapshots are deep copies and are never modified.
#[derive(Debug, Clone, Default)]
pub struct History {
    /// Snapshots in chronological order.
    snapshots: Vec<Grid>,
}

impl History {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a snapshot of `grid`.
    pub fn push(&mut self, grid: &Grid) {
        self.snapshots.push(grid.clone());
    }

    /// Number of snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// True if nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Most recent snapshot.
    #[must_use]
    pub fn last(&self) -> Option<&Grid> {
        self.snapshots.last()
    }

    /// Iterate over snapshots, oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, Grid> {
        self.snapshots.iter()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Grid;
    type IntoIter = std::slice::Iter<'a, Grid>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// True if `grid` is cell-for-cell identical to any snapshot in `history`.
#[must_use]
pub fn has_been_visited(grid: &Grid, history: &History) -> bool {
    history.iter().any(|snapshot| snapshot == grid)
}
