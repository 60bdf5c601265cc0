//! The rectangular strategy grid.

use std::fmt;
use std::ops::Index;

use crate::error::MalformedInput;
use crate::grid::{Coord, Strategy};

/// A rows x cols grid of strategies.
///
/// Dimensions are fixed at construction and both are at least one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Number of rows.
    rows: usize,
    /// Number of columns.
    cols: usize,
    /// Cells stored in row-major order.
    cells: Vec<Strategy>,
}

impl Grid {
    /// Create a grid with every cell set to `strategy`.
    ///
    /// Returns `None` if either dimension is zero.
    #[must_use]
    pub fn filled(rows: usize, cols: usize, strategy: Strategy) -> Option<Self> {
        if rows == 0 || cols == 0 {
            return None;
        }

        Some(Self {
            rows,
            cols,
            cells: vec![strategy; rows.checked_mul(cols)?],
        })
    }

    /// Build a grid from explicit rows.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedInput::Empty`] for no rows (or empty rows), and
    /// [`MalformedInput::RaggedRow`] when a row's width differs from the first.
    pub fn from_rows(rows: Vec<Vec<Strategy>>) -> Result<Self, MalformedInput> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(MalformedInput::Empty);
        }

        let height = rows.len();
        let mut cells = Vec::with_capacity(height * cols);
        for (idx, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(MalformedInput::RaggedRow {
                    line: idx + 1,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend(row);
        }

        Ok(Self::from_parts(height, cols, cells))
    }

    /// Assemble a grid from already validated parts.
    pub(crate) fn from_parts(rows: usize, cols: usize, cells: Vec<Strategy>) -> Self {
        debug_assert!(rows > 0 && cols > 0);
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }

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

    /// Raw cells in row-major order.
    #[must_use]
    #[inline]
    pub fn cells(&self) -> &[Strategy] {
        &self.cells
    }

    /// One row of the grid.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[Strategy]> {
        (row < self.rows).then(|| &self.cells[row * self.cols..(row + 1) * self.cols])
    }

    /// Check if a coordinate is within the grid bounds.
    #[must_use]
    pub const fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    fn coord_to_index(&self, coord: Coord) -> Option<usize> {
        self.in_bounds(coord)
            .then(|| coord.row * self.cols + coord.col)
    }

    /// Strategy at the given coordinate.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<Strategy> {
        self.coord_to_index(coord).map(|idx| self.cells[idx])
    }

    /// Set the strategy at the given coordinate.
    ///
    /// Returns `false` if the coordinate is out of bounds.
    pub fn set(&mut self, coord: Coord, strategy: Strategy) -> bool {
        if let Some(idx) = self.coord_to_index(coord) {
            self.cells[idx] = strategy;
            true
        } else {
            false
        }
    }

    /// Switch the cell at `coord` to the other strategy.
    ///
    /// Returns `false` if the coordinate is out of bounds.
    pub fn flip(&mut self, coord: Coord) -> bool {
        if let Some(idx) = self.coord_to_index(coord) {
            self.cells[idx] = self.cells[idx].opposite();
            true
        } else {
            false
        }
    }

    /// Iterate over all coordinates and strategies in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Strategy)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &s)| (Coord::new(idx / cols, idx % cols), s))
    }

    /// Iterate over all coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Coord::new(row, col)))
    }

    /// Number of cells playing `strategy`.
    #[must_use]
    pub fn count(&self, strategy: Strategy) -> usize {
        self.cells.iter().filter(|&&s| s == strategy).count()
    }
}

impl Index<Coord> for Grid {
    type Output = Strategy;

    fn index(&self, coord: Coord) -> &Strategy {
        assert!(self.in_bounds(coord), "coordinate {coord:?} out of bounds");
        &self.cells[coord.row * self.cols + coord.col]
    }
}

/// Rows of space-separated glyphs, one row per line.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks(self.cols).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, strategy) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{strategy}")?;
            }
        }
        Ok(())
    }
}
