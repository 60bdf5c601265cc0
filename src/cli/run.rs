//! Run command implementation.

use super::output::{JsonRunReport, format_step, format_verdict, grid_rows};
use super::{CliError, OutputFormat};
use nashgrid::{PayoffTable, Session};
use std::path::Path;

/// Load the grid, run it to a terminal state and print the result.
///
/// # Errors
///
/// Returns an error if the payoffs are not finite, the grid cannot be loaded,
/// or the run ends in a cycle.
pub(crate) fn execute(
    file: &Path,
    payoffs: PayoffTable,
    format: OutputFormat,
    quiet: bool,
) -> Result<(), CliError> {
    if !payoffs.is_finite() {
        return Err(CliError::new("payoffs must be finite numbers"));
    }

    let grid = nashgrid::grid::load(file)?;
    let mut session = Session::new(grid, payoffs);

    match format {
        OutputFormat::Text => run_text(&mut session, quiet),
        OutputFormat::Json => run_json(&mut session),
    }
}

fn run_text(session: &mut Session, quiet: bool) -> Result<(), CliError> {
    if !quiet {
        println!("{}", session.grid());
    }

    let result = session.run(|s, _| {
        if !quiet {
            print!("{}", format_step(s.grid()));
        }
    });

    if quiet {
        println!("{}", session.grid());
    }

    let summary = result?;
    println!();
    println!("{}", format_verdict(&summary));
    Ok(())
}

fn run_json(session: &mut Session) -> Result<(), CliError> {
    let initial = grid_rows(session.grid());
    let mut trajectory = Vec::new();

    let result = session.run(|s, _| trajectory.push(grid_rows(s.grid())));
    if result.is_err() {
        // The repeating configuration came from a changing step too.
        trajectory.push(grid_rows(session.grid()));
    }

    let report = JsonRunReport::from_session(session, &result, initial, trajectory);
    let json = serde_json::to_string_pretty(&report)?;
    println!("{json}");

    result.map(|_| ()).map_err(CliError::from)
}
