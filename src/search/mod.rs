//! The local-search drivers.
//!
//! Both drivers own their [`crate::state::SearchState`] exclusively and
//! replace it wholesale whenever a move or restart happens; candidate states
//! which are not committed are dropped as soon as the decision is made.

pub mod hill_climbing;
pub mod min_conflicts;

pub use hill_climbing::HillClimbing;
pub use min_conflicts::MinConflicts;

use crate::statistics::log_statistic;

/// Statistics of the search process.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Counters {
    /// The number of random restarts performed.
    pub(crate) num_restarts: u64,
    /// The number of committed moves.
    pub(crate) num_state_changes: u64,
}

impl Counters {
    pub(crate) fn log_statistics(&self) {
        log_statistic("numberOfRestarts", self.num_restarts);
        log_statistic("numberOfStateChanges", self.num_state_changes);
    }
}
