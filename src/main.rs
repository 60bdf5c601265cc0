//! nashgrid CLI - run a cooperate/compete grid until it settles or loops.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::Parser;
use nashgrid::PayoffTable;
use std::path::PathBuf;
use std::process::ExitCode;

/// nashgrid - search a strategy grid for a Nash equilibrium
#[derive(Parser, Debug)]
#[command(name = "nashgrid")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Grid file: one row per line, `.` cooperates, `X` competes
    file: PathBuf,

    /// Payoff for cooperating next to a cooperator
    #[arg(allow_negative_numbers = true)]
    coop_coop: f64,

    /// Payoff for cooperating next to a competitor
    #[arg(allow_negative_numbers = true)]
    coop_comp: f64,

    /// Payoff for competing next to a cooperator
    #[arg(allow_negative_numbers = true)]
    comp_coop: f64,

    /// Payoff for competing next to a competitor
    #[arg(allow_negative_numbers = true)]
    comp_comp: f64,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    format: cli::OutputFormat,

    /// Only print the final grid and verdict
    #[arg(short, long)]
    quiet: bool,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // Usage errors exit 1; --help and --version exit 0.
            let code = if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            // A closed stderr leaves nothing else to report to.
            e.print().ok();
            return code;
        }
    };

    cli::init_logging(args.verbose);

    let payoffs = PayoffTable::new(args.coop_coop, args.coop_comp, args.comp_coop, args.comp_comp);
    let result = cli::run::execute(&args.file, payoffs, args.format, args.quiet);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!();
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
