#![no_main]

//! Session loop fuzzer.
//!
//! Runs small arbitrary grids under arbitrary finite payoffs and checks the
//! lifecycle: history grows by one per step, the run terminates within the
//! number of distinct configurations, and a reported cycle really repeats.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use nashgrid::engine::has_been_visited;
use nashgrid::{Grid, History, PayoffTable, Session, StepOutcome, Strategy};

/// Structured input for session fuzzing.
#[derive(Arbitrary, Debug)]
struct SessionInput {
    /// Grid height minus one (capped).
    rows: u8,
    /// Grid width minus one (capped).
    cols: u8,
    /// Cell bits, row-major; missing bits cooperate.
    cells: Vec<bool>,
    /// Payoffs in `initialize` order.
    payoffs: [i16; 4],
}

fuzz_target!(|input: SessionInput| {
    // Cap dimensions to keep the step bound small
    let rows = usize::from(input.rows % 4) + 1;
    let cols = usize::from(input.cols % 4) + 1;

    let cells = (0..rows)
        .map(|r| {
            (0..cols)
                .map(|c| match input.cells.get(r * cols + c) {
                    Some(true) => Strategy::Compete,
                    _ => Strategy::Cooperate,
                })
                .collect()
        })
        .collect();
    let Ok(grid) = Grid::from_rows(cells) else {
        return;
    };

    let [a, b, c, d] = input.payoffs.map(f64::from);
    let payoffs = PayoffTable::new(a, b, c, d);

    let mut seen = History::new();
    seen.push(&grid);
    let mut session = Session::new(grid, payoffs);
    let bound = (1usize << (rows * cols)) + 1;

    for step in 1..=bound {
        let outcome = session.step();
        assert_eq!(session.history().len(), step + 1);

        match outcome {
            StepOutcome::Changed(changes) => {
                assert!(!changes.is_empty());
                assert!(!has_been_visited(session.grid(), &seen));
            }
            StepOutcome::Converged => {
                assert_eq!(seen.last(), Some(session.grid()));
                return;
            }
            StepOutcome::CycleDetected(err) => {
                assert_eq!(err.step, step);
                assert!(has_been_visited(session.grid(), &seen));
                return;
            }
        }
        seen.push(session.grid());
    }

    panic!("session did not terminate within {bound} steps");
});
