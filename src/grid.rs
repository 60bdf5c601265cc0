//! Grid layer for nashgrid.
//!
//! Holds the strategy grid the simulation mutates:
//! - Two-valued strategies (cooperate / compete)
//! - Coordinates and clamped Moore windows
//! - The rectangular grid itself
//! - Loading grids from `.`/`X` text

mod board;
mod coord;
mod loader;
mod strategy;

pub use board::Grid;
pub use coord::Coord;
pub use loader::load;
pub use strategy::Strategy;
