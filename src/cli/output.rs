//! Output formatting utilities for CLI.

use nashgrid::{EquilibriumUnreachable, Grid, PayoffTable, RunSummary, Session, Strategy};
use serde::Serialize;

/// Line printed between consecutive grids: `==` once per column.
pub(super) fn separator(cols: usize) -> String {
    "==".repeat(cols)
}

/// Text printed after a changing step: a blank line, the separator and the
/// new grid.
pub(super) fn format_step(grid: &Grid) -> String {
    format!("\n{}\n{grid}\n", separator(grid.cols()))
}

/// Closing line for a run that reached an equilibrium.
pub(super) fn format_verdict(summary: &RunSummary) -> String {
    format!(
        "Nash equilibrium configuration found after {} steps ({} cooperating, {} competing)",
        summary.steps, summary.cooperators, summary.competitors
    )
}

/// Grid rows as compact glyph strings, e.g. `".X."`.
pub(super) fn grid_rows(grid: &Grid) -> Vec<String> {
    (0..grid.rows())
        .filter_map(|r| grid.row(r))
        .map(|row| row.iter().copied().map(Strategy::glyph).collect())
        .collect()
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(super) enum JsonOutcome {
    /// No cell changed on the last step.
    Converged,
    /// A configuration repeated.
    CycleDetected,
}

/// JSON-serializable run report.
#[derive(Debug, Serialize)]
pub(super) struct JsonRunReport {
    /// How the run ended.
    pub(super) outcome: JsonOutcome,
    /// Steps taken.
    pub(super) steps: usize,
    /// Grid height.
    pub(super) rows: usize,
    /// Grid width.
    pub(super) cols: usize,
    /// Payoffs used.
    pub(super) payoffs: PayoffTable,
    /// Starting configuration.
    pub(super) initial: Vec<String>,
    /// Configuration when the run stopped.
    #[serde(rename = "final")]
    pub(super) final_grid: Vec<String>,
    /// Configuration after every changing step, in order, including the
    /// step that repeated an earlier configuration. A converging run's last
    /// step changes nothing and adds no entry.
    pub(super) trajectory: Vec<Vec<String>>,
}

impl JsonRunReport {
    /// Build a report from a finished session.
    pub(super) fn from_session(
        session: &Session,
        result: &Result<RunSummary, EquilibriumUnreachable>,
        initial: Vec<String>,
        trajectory: Vec<Vec<String>>,
    ) -> Self {
        let outcome = match result {
            Ok(_) => JsonOutcome::Converged,
            Err(_) => JsonOutcome::CycleDetected,
        };

        Self {
            outcome,
            steps: session.steps(),
            rows: session.grid().rows(),
            cols: session.grid().cols(),
            payoffs: *session.payoffs(),
            initial,
            final_grid: grid_rows(session.grid()),
            trajectory,
        }
    }
}
