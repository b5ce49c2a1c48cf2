//! Local-search solvers for the N-Queens problem.
//!
//! Two classic heuristics are implemented on top of a shared board
//! representation:
//! - [`search::HillClimbing`]: steepest-descent hill climbing with random
//!   restarts, for boards of up to 40 queens;
//! - [`search::MinConflicts`]: randomized min-conflicts repair with a
//!   bounded-patience restart, which scales to boards of 100 queens.
//!
//! Both drivers operate on a [`state::SearchState`], a value-semantic board
//! state which caches the number of attacking pairs, and are run from the
//! command line through [`runner::run`] (see the `hill-climb` and
//! `min-conflicts` binaries).

pub mod asserts;
pub mod board;
pub mod options;
pub mod results;
pub mod runner;
pub mod search;
pub mod state;
pub mod statistics;
pub mod termination;

mod tests;
