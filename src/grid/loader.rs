//! Loading grids from `.`/`X` text.
//!
//! Each line is a row. `.` is a cooperator, `X` a competitor, and every
//! other byte is skipped without counting as a column. Lines with no cells
//! are ignored; the first non-empty line fixes the width.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use crate::error::MalformedInput;
use crate::grid::{Grid, Strategy};

impl Grid {
    /// Parse a grid from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedInput::RaggedRow`] if a non-empty row differs in
    /// width from the first one, or [`MalformedInput::Empty`] if there are no
    /// non-empty rows.
    pub fn parse_bytes(input: &[u8]) -> Result<Self, MalformedInput> {
        let mut cells = Vec::new();
        let mut cols: Option<usize> = None;
        let mut rows = 0usize;

        for (idx, line) in input.split(|&b| b == b'\n').enumerate() {
            let before = cells.len();
            cells.extend(line.iter().copied().filter_map(Strategy::from_glyph));
            let width = cells.len() - before;

            if width == 0 {
                continue;
            }

            match cols {
                None => cols = Some(width),
                Some(expected) if expected != width => {
                    return Err(MalformedInput::RaggedRow {
                        line: idx + 1,
                        expected,
                        found: width,
                    });
                }
                Some(_) => {}
            }
            rows += 1;
        }

        let Some(cols) = cols else {
            return Err(MalformedInput::Empty);
        };

        Ok(Self::from_parts(rows, cols, cells))
    }

    /// Read and parse a grid from any byte source.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedInput::Unreadable`] if reading fails, otherwise the
    /// same errors as [`Grid::parse_bytes`].
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, MalformedInput> {
        let mut buf = Vec::new();
        reader
            .read_to_end(&mut buf)
            .map_err(|e| MalformedInput::unreadable(None, e))?;
        Self::parse_bytes(&buf)
    }
}

impl FromStr for Grid {
    type Err = MalformedInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_bytes(s.as_bytes())
    }
}

/// Load a grid from a file.
///
/// # Errors
///
/// Returns [`MalformedInput::Unreadable`] if the file cannot be opened or
/// read, otherwise the same errors as [`Grid::parse_bytes`].
pub fn load(path: impl AsRef<Path>) -> Result<Grid, MalformedInput> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| MalformedInput::unreadable(Some(path.to_path_buf()), e))?;

    let grid = Grid::from_reader(file).map_err(|e| match e {
        MalformedInput::Unreadable { source, .. } => {
            MalformedInput::unreadable(Some(path.to_path_buf()), source)
        }
        other => other,
    })?;

    log::info!(
        "loaded {}x{} grid from {}",
        grid.rows(),
        grid.cols(),
        path.display()
    );
    Ok(grid)
}
