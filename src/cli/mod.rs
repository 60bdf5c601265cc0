//! CLI command implementation for nashgrid.

pub(crate) mod run;

mod output;

use clap::ValueEnum;
use nashgrid::{EquilibriumUnreachable, MalformedInput};
use std::error::Error;
use std::fmt;

/// Output format for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Grid after every step, then a verdict.
    Text,
    /// Machine-readable JSON report.
    Json,
}

/// Install the global logger.
///
/// `RUST_LOG` wins over the verbosity flag when set.
pub(crate) fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<MalformedInput> for CliError {
    fn from(e: MalformedInput) -> Self {
        Self::new(e.to_string())
    }
}

impl From<EquilibriumUnreachable> for CliError {
    fn from(e: EquilibriumUnreachable) -> Self {
        Self::new(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(format!("JSON serialization failed: {e}"))
    }
}
