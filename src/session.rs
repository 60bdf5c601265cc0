//! Simulation session: drives the engine until the grid settles or repeats.
//!
//! A session owns one grid, its payoff table and the history of every
//! configuration seen so far. Each [`Session::step`] computes utilities,
//! applies the update, checks the new configuration against history and
//! records it.

use crate::engine::{ChangeSet, History, compute_utilities, has_been_visited, update};
use crate::error::EquilibriumUnreachable;
use crate::grid::{Grid, Strategy};
use crate::payoff::PayoffTable;

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// More steps may change the grid.
    Running,
    /// The last step changed nothing.
    Converged,
    /// The last step reproduced an earlier configuration.
    CycleDetected(EquilibriumUnreachable),
}

impl SessionState {
    /// True for `Converged` and `CycleDetected`.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, SessionState::Running)
    }
}

/// Result of a single step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Cells changed and the new configuration is unseen.
    Changed(ChangeSet),
    /// No cell changed: the grid is an equilibrium.
    Converged,
    /// Cells changed back into a configuration already visited.
    CycleDetected(EquilibriumUnreachable),
}

impl StepOutcome {
    /// True if no further steps should be taken.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, StepOutcome::Changed(_))
    }
}

/// Summary of a run that reached an equilibrium.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Steps taken, including the final step that changed nothing.
    pub steps: usize,
    /// Cooperating cells in the equilibrium.
    pub cooperators: usize,
    /// Competing cells in the equilibrium.
    pub competitors: usize,
}

/// One simulation run over a grid.
#[derive(Debug, Clone)]
pub struct Session {
    /// Current configuration, mutated in place.
    grid: Grid,
    /// Payoffs, fixed for the run.
    payoffs: PayoffTable,
    /// Every configuration seen, starting with the initial one.
    history: History,
    /// Where the session is in its lifecycle.
    state: SessionState,
    /// Steps taken so far.
    steps: usize,
}

impl Session {
    /// Start a session. The initial grid is the first history entry.
    #[must_use]
    pub fn new(grid: Grid, payoffs: PayoffTable) -> Self {
        let mut history = History::new();
        history.push(&grid);

        Self {
            grid,
            payoffs,
            history,
            state: SessionState::Running,
            steps: 0,
        }
    }

    /// Current grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Payoffs in use.
    #[must_use]
    pub fn payoffs(&self) -> &PayoffTable {
        &self.payoffs
    }

    /// Configurations seen so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Steps taken so far.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Advance the simulation by one iteration.
    ///
    /// Once the session is terminal this does nothing and returns the
    /// terminal outcome again.
    pub fn step(&mut self) -> StepOutcome {
        match self.state {
            SessionState::Running => {}
            SessionState::Converged => return StepOutcome::Converged,
            SessionState::CycleDetected(err) => return StepOutcome::CycleDetected(err),
        }

        let utilities = compute_utilities(&self.grid, &self.payoffs);
        let changes = update(&mut self.grid, &utilities);
        self.steps += 1;

        // Check against prior configurations before recording this one.
        let repeated = !changes.is_empty() && has_been_visited(&self.grid, &self.history);
        self.history.push(&self.grid);

        log::debug!(
            "step {}: {} cells changed, {} configurations recorded",
            self.steps,
            changes.len(),
            self.history.len()
        );

        if repeated {
            let err = EquilibriumUnreachable { step: self.steps };
            log::info!("{err}");
            self.state = SessionState::CycleDetected(err);
            StepOutcome::CycleDetected(err)
        } else if changes.is_empty() {
            log::info!("equilibrium reached after {} steps", self.steps);
            self.state = SessionState::Converged;
            StepOutcome::Converged
        } else {
            StepOutcome::Changed(changes)
        }
    }

    /// Step until the session is terminal.
    ///
    /// `observer` is called after every step that changed the grid, with the
    /// session already holding the new configuration.
    ///
    /// # Errors
    ///
    /// Returns [`EquilibriumUnreachable`] if a configuration repeats.
    pub fn run<F>(&mut self, mut observer: F) -> Result<RunSummary, EquilibriumUnreachable>
    where
        F: FnMut(&Self, &ChangeSet),
    {
        loop {
            match self.step() {
                StepOutcome::Changed(changes) => observer(self, &changes),
                StepOutcome::Converged => {
                    return Ok(RunSummary {
                        steps: self.steps,
                        cooperators: self.grid.count(Strategy::Cooperate),
                        competitors: self.grid.count(Strategy::Compete),
                    });
                }
                StepOutcome::CycleDetected(err) => return Err(err),
            }
        }
    }
}
