//! Grid coordinates and clamped Moore windows.

/// A cell position on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Row index, counted from the top.
    pub row: usize,
    /// Column index, counted from the left.
    pub col: usize,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The 3x3 window around this cell clamped to a `rows` x `cols` grid,
    /// center included, in row-major order starting at the window's top-left.
    ///
    /// Returns a fixed-size array and count to avoid heap allocation.
    /// The array contains valid coordinates in indices 0..count.
    #[must_use]
    #[inline]
    pub fn moore_window(&self, rows: usize, cols: usize) -> ([Coord; 9], u8) {
        let mut result = [Coord::new(0, 0); 9];
        let mut count = 0u8;

        let row_end = (self.row + 1).min(rows.saturating_sub(1));
        let col_end = (self.col + 1).min(cols.saturating_sub(1));

        for row in self.row.saturating_sub(1)..=row_end {
            for col in self.col.saturating_sub(1)..=col_end {
                result[count as usize] = Coord::new(row, col);
                count += 1;
            }
        }

        (result, count)
    }

    /// The up-to-8 Moore neighbors of this cell, in row-major order.
    #[must_use]
    #[inline]
    pub fn neighbors(&self, rows: usize, cols: usize) -> ([Coord; 8], u8) {
        let mut result = [Coord::new(0, 0); 8];
        let mut count = 0u8;

        let (window, size) = self.moore_window(rows, cols);
        for coord in &window[..size as usize] {
            if coord != self {
                result[count as usize] = *coord;
                count += 1;
            }
        }

        (result, count)
    }
}
