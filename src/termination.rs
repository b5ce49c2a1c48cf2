//! Termination conditions which bound how long a search may run.
//!
//! Local search is not guaranteed to converge within any particular time;
//! a [`TimeBudget`] makes that hazard explicit and opt-in, while
//! [`Indefinite`] lets the search run unbounded.

use std::time::Duration;
use std::time::Instant;

/// A condition which is polled by the search drivers once per iteration to
/// determine whether they should give up.
pub trait TerminationCondition {
    /// Returns true when the search should stop.
    fn should_stop(&mut self) -> bool;
}

/// A [`TerminationCondition`] which never stops the search.
#[derive(Clone, Copy, Debug, Default)]
pub struct Indefinite;

impl TerminationCondition for Indefinite {
    fn should_stop(&mut self) -> bool {
        false
    }
}

/// A [`TerminationCondition`] which stops the search when a wall-clock time
/// budget has been exhausted.
#[derive(Clone, Copy, Debug)]
pub struct TimeBudget {
    started_at: Instant,
    budget: Duration,
}

impl TimeBudget {
    /// Creates a time budget which starts counting down immediately.
    pub fn starting_now(budget: Duration) -> TimeBudget {
        TimeBudget {
            started_at: Instant::now(),
            budget,
        }
    }
}

impl TerminationCondition for TimeBudget {
    fn should_stop(&mut self) -> bool {
        self.started_at.elapsed() >= self.budget
    }
}
