// Allow unwrap and panics in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::panic))]
//! nashgrid: a deterministic cellular cooperate/compete game.
//!
//! Every cell of a rectangular grid plays either *cooperate* or *compete*.
//! Each iteration, cells score the payoffs against their Moore neighbors and
//! switch to the strategy of the best-scoring cell around them. The run ends
//! when nothing changes (an equilibrium) or when a configuration repeats (no
//! equilibrium is reachable).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Session (step / run, history)     │
//! ├─────────────────────────────────────┤
//! │   Engine (utility, update, cycle)   │
//! ├─────────────────────────────────────┤
//! │   Grid + PayoffTable                │
//! └─────────────────────────────────────┘
//! ```
//!
//! ```
//! use nashgrid::{Grid, PayoffTable, Session};
//!
//! let grid: Grid = "..\n..".parse().unwrap();
//! let mut session = Session::new(grid, PayoffTable::new(1.0, 0.0, 0.0, 1.0));
//! let summary = session.run(|_, _| {}).unwrap();
//! assert_eq!(summary.steps, 1);
//! ```

pub mod engine;
pub mod error;
pub mod grid;
pub mod payoff;
pub mod session;

pub use error::{EquilibriumUnreachable, MalformedInput};

// Re-export key types at crate root for convenience
pub use engine::{ChangeSet, History, UtilityField};
pub use grid::{Coord, Grid, Strategy};
pub use payoff::PayoffTable;
pub use session::{RunSummary, Session, SessionState, StepOutcome};
