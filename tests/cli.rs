//! Command-line tests: argument handling, exit codes and printed output.
//!
//! Run with: cargo test --release --test cli

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

/// Write `contents` to a temporary grid file.
fn grid_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Run the binary with logging silenced.
fn nashgrid(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_nashgrid"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn test_missing_payoff_is_usage_error() {
    let file = grid_file("..X\n");
    let path = file.path().to_str().unwrap();
    let output = nashgrid(&[path, "1", "0", "3"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Usage"));
}

#[test]
fn test_help_exits_zero() {
    let output = nashgrid(&["--help"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Usage"));
}

#[test]
fn test_nan_payoff_is_rejected() {
    let file = grid_file("..X\n");
    let path = file.path().to_str().unwrap();
    let output = nashgrid(&[path, "1", "nan", "3", "0"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("finite"));
}

#[test]
fn test_missing_file_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.grid");
    let output = nashgrid(&[path.to_str().unwrap(), "1", "0", "3", "0"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("absent.grid"));
}

#[test]
fn test_cycle_prints_trajectory_then_fails() {
    let file = grid_file("..X\n...\nX..\n");
    let path = file.path().to_str().unwrap();
    let output = nashgrid(&[path, "0", "5", "5", "0"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        ". . X\n. . .\nX . .\n\n======\n. X X\nX X X\nX X .\n"
    );
    assert_eq!(
        stderr(&output),
        "\nError: loop detected at step 2: no equilibrium is reachable from this configuration\n"
    );
}

#[test]
fn test_convergence_text_output() {
    let file = grid_file("..X\n");
    let path = file.path().to_str().unwrap();
    let output = nashgrid(&[path, "1", "0", "3", "0"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        ". . X\n\n======\n. X X\n\n======\nX X X\n\n\
         Nash equilibrium configuration found after 3 steps (0 cooperating, 3 competing)\n"
    );
}

#[test]
fn test_quiet_prints_final_grid_and_verdict() {
    let file = grid_file("..X\n");
    let path = file.path().to_str().unwrap();
    let output = nashgrid(&["-q", path, "1", "0", "3", "0"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "X X X\n\nNash equilibrium configuration found after 3 steps (0 cooperating, 3 competing)\n"
    );
}

#[test]
fn test_json_report_for_convergence() {
    let file = grid_file("..X\n");
    let path = file.path().to_str().unwrap();
    let output = nashgrid(&["-f", "json", path, "1", "0", "3", "0"]);

    assert_eq!(output.status.code(), Some(0));
    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(
        report,
        serde_json::json!({
            "outcome": "converged",
            "steps": 3,
            "rows": 1,
            "cols": 3,
            "payoffs": { "table": [[1.0, 0.0], [3.0, 0.0]] },
            "initial": ["..X"],
            "final": ["XXX"],
            "trajectory": [[".XX"], ["XXX"]],
        })
    );
}

#[test]
fn test_json_report_for_cycle_exits_one() {
    let file = grid_file("..X\n...\nX..\n");
    let path = file.path().to_str().unwrap();
    let output = nashgrid(&["--format", "json", path, "0", "5", "5", "0"]);

    assert_eq!(output.status.code(), Some(1));
    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["outcome"], "cycle_detected");
    assert_eq!(report["steps"], 2);
    assert_eq!(
        report["trajectory"],
        serde_json::json!([[".XX", "XXX", "XX."], ["..X", "...", "X.."]])
    );
    assert_eq!(report["final"], report["initial"]);
}
