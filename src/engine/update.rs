//! Best-neighbor strategy propagation.

use crate::engine::UtilityField;
use crate::grid::{Coord, Grid};

/// Cells whose strategy changed in one update, in row-major order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    /// Changed coordinates.
    coords: Vec<Coord>,
}

impl ChangeSet {
    /// Number of changed cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// True when nothing changed, i.e. the grid is at a fixed point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Iterate over the changed coordinates.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.coords.iter().copied()
    }

    /// Whether `coord` changed.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        self.coords.binary_search(&coord).is_ok()
    }

    /// Changed coordinates as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Coord] {
        &self.coords
    }
}

/// The cell with the greatest utility in the clamped 3x3 window around
/// `center`, center included.
///
/// The window is scanned row-major from its top-left corner and a later cell
/// only wins if strictly greater, so ties go to the first cell scanned.
#[must_use]
pub fn best_in_window(utilities: &UtilityField, center: Coord) -> Coord {
    let (window, count) = center.moore_window(utilities.rows(), utilities.cols());

    let mut best = window[0];
    let mut best_utility = utilities.at(best);
    for &coord in &window[1..count as usize] {
        let utility = utilities.at(coord);
        if utility > best_utility {
            best = coord;
            best_utility = utility;
        }
    }
    best
}

/// Move every cell towards the best strategy in its window.
///
/// Changes are decided against the pre-update grid and applied together.
/// A changed cell is flipped to the opposite strategy rather than copying the
/// winner's strategy; the two are the same only because there are exactly two
/// strategies, and adding a third would require adopting the winner's
/// strategy explicitly.
pub fn update(grid: &mut Grid, utilities: &UtilityField) -> ChangeSet {
    debug_assert_eq!(grid.rows(), utilities.rows());
    debug_assert_eq!(grid.cols(), utilities.cols());

    let coords: Vec<Coord> = grid
        .iter()
        .filter(|&(coord, own)| grid[best_in_window(utilities, coord)] != own)
        .map(|(coord, _)| coord)
        .collect();

    for &coord in &coords {
        grid.flip(coord);
    }

    ChangeSet { coords }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compute_utilities;
    use crate::payoff::PayoffTable;

    fn step(grid: &mut Grid, payoffs: &PayoffTable) -> ChangeSet {
        let utilities = compute_utilities(grid, payoffs);
        update(grid, &utilities)
    }

    #[test]
    fn test_single_cell_never_changes() {
        let mut grid: Grid = ".".parse().unwrap();
        let changes = step(&mut grid, &PayoffTable::new(-3.0, 7.0, 1.0, 2.0));
        assert!(changes.is_empty());
    }

    #[test]
    fn test_uniform_grid_is_fixed_point() {
        let mut grid: Grid = "..\n..".parse().unwrap();
        let before = grid.clone();
        let changes = step(&mut grid, &PayoffTable::new(1.0, 0.0, 0.0, 1.0));
        assert!(changes.is_empty());
        assert_eq!(grid, before);
    }

    #[test]
    fn test_ties_go_to_first_scanned_cell() {
        // All utilities are zero, so each window picks its top-left cell.
        let mut grid: Grid = ".X.".parse().unwrap();
        let utilities = compute_utilities(&grid, &PayoffTable::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(best_in_window(&utilities, Coord::new(0, 0)), Coord::new(0, 0));
        assert_eq!(best_in_window(&utilities, Coord::new(0, 1)), Coord::new(0, 0));
        assert_eq!(best_in_window(&utilities, Coord::new(0, 2)), Coord::new(0, 1));

        let changes = update(&mut grid, &utilities);
        assert_eq!(changes.as_slice(), &[Coord::new(0, 1), Coord::new(0, 2)]);
        assert_eq!(grid.to_string(), ". . X");
    }

    #[test]
    fn test_tied_neighbor_beats_center() {
        // Every cell scores 10, so each window picks (0, 0) over its own center.
        let mut grid: Grid = ".X\nX.".parse().unwrap();
        let utilities = compute_utilities(&grid, &PayoffTable::new(0.0, 5.0, 5.0, 0.0));
        assert_eq!(utilities.values(), &[10.0; 4]);
        assert_eq!(best_in_window(&utilities, Coord::new(1, 1)), Coord::new(0, 0));

        let changes = update(&mut grid, &utilities);
        assert_eq!(changes.as_slice(), &[Coord::new(0, 1), Coord::new(1, 0)]);
        assert_eq!(grid, "..\n..".parse::<Grid>().unwrap());
    }

    #[test]
    fn test_strictly_greater_neighbor_wins() {
        let grid: Grid = "X..\n...\n...".parse().unwrap();
        let utilities = compute_utilities(&grid, &PayoffTable::new(0.0, 3.0, 1.0, 0.0));
        // Utilities: 3 3 0 / 3 3 0 / 0 0 0
        assert_eq!(best_in_window(&utilities, Coord::new(1, 1)), Coord::new(0, 0));
        assert_eq!(best_in_window(&utilities, Coord::new(2, 2)), Coord::new(1, 1));
    }

    #[test]
    fn test_changes_are_applied_simultaneously() {
        let mut grid: Grid = "X..\n...\n...".parse().unwrap();
        let changes = step(&mut grid, &PayoffTable::new(0.0, 3.0, 1.0, 0.0));
        assert_eq!(
            changes.as_slice(),
            &[Coord::new(0, 1), Coord::new(1, 0), Coord::new(1, 1)]
        );
        assert!(changes.contains(Coord::new(1, 1)));
        assert!(!changes.contains(Coord::new(0, 0)));
        assert_eq!(grid, "XX.\nXX.\n...".parse::<Grid>().unwrap());
    }

    #[test]
    fn test_asymmetric_update() {
        let mut grid: Grid = ".X.\nX.X".parse().unwrap();
        let changes = step(&mut grid, &PayoffTable::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(changes.len(), 3);
        assert_eq!(grid.count(crate::grid::Strategy::Compete), 6);
    }

    #[test]
    fn test_fixed_point_is_idempotent() {
        let mut grid: Grid = "XXX\nXXX".parse().unwrap();
        let payoffs = PayoffTable::new(1.0, 2.0, 3.0, 4.0);
        assert!(step(&mut grid, &payoffs).is_empty());
        assert!(step(&mut grid, &payoffs).is_empty());
    }
}
