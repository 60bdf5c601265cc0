//! Error types for grid loading and the simulation loop.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// The grid source could not be turned into a rectangular, non-empty grid.
#[derive(Debug)]
pub enum MalformedInput {
    /// The source could not be opened or read.
    Unreadable {
        /// File the grid was read from, if any.
        path: Option<PathBuf>,
        /// Underlying I/O failure.
        source: io::Error,
    },
    /// A non-empty row differs in width from the first non-empty row.
    RaggedRow {
        /// 1-based line number of the offending row.
        line: usize,
        /// Width established by the first non-empty row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// No non-empty rows were found.
    Empty,
}

impl MalformedInput {
    /// Wrap an I/O failure, remembering which file it came from.
    #[must_use]
    pub fn unreadable(path: Option<PathBuf>, source: io::Error) -> Self {
        Self::Unreadable { path, source }
    }
}

impl fmt::Display for MalformedInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreadable {
                path: Some(path),
                source,
            } => write!(f, "could not read {}: {source}", path.display()),
            Self::Unreadable { path: None, source } => {
                write!(f, "could not read grid source: {source}")
            }
            Self::RaggedRow {
                line,
                expected,
                found,
            } => write!(
                f,
                "row on line {line} has {found} cells, expected {expected}"
            ),
            Self::Empty => write!(f, "invalid or empty strategy grid"),
        }
    }
}

impl std::error::Error for MalformedInput {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unreadable { source, .. } => Some(source),
            Self::RaggedRow { .. } | Self::Empty => None,
        }
    }
}

/// A configuration repeated after at least one change, so the run can never settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EquilibriumUnreachable {
    /// Step (1-based) on which the repeated configuration appeared.
    pub step: usize,
}

impl fmt::Display for EquilibriumUnreachable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "loop detected at step {}: no equilibrium is reachable from this configuration",
            self.step
        )
    }
}

impl std::error::Error for EquilibriumUnreachable {}
