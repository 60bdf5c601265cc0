//! Fixed-point iteration engine.
//!
//! One iteration is:
//! - Utility computation over each cell's Moore neighbors
//! - Best-in-window strategy propagation
//! - Cycle detection against every configuration seen so far

mod cycle;
mod update;
mod utility;

pub use cycle::{History, has_been_visited};
pub use update::{ChangeSet, best_in_window, update};
pub use utility::{UtilityField, compute_utilities};
