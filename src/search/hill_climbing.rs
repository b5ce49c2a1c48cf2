//! Steepest-descent hill climbing with random restarts.

use log::debug;
use log::warn;
use rand::rngs::SmallRng;

use crate::options::SearchOptions;
use crate::results::SearchResult;
use crate::results::Solution;
use crate::runner::LocalSearch;
use crate::search::Counters;
use crate::state::SearchState;
use crate::termination::TerminationCondition;

/// Board sizes at or above this produce a startup warning; every iteration
/// scores all N² candidate neighbours with a board scan each, so convergence
/// near the maximum dimension takes tens of seconds.
const SLOW_CONVERGENCE_DIMENSION: usize = 32;

/// A steepest-descent hill climber over complete placements.
///
/// Every iteration scores all column-local alternative placements and commits
/// the candidate with the strictly lowest number of attacking pairs. When no
/// candidate improves on the current state, the state is a local optimum and
/// the search restarts from a fresh random placement.
#[derive(Debug)]
pub struct HillClimbing {
    dimension: usize,
    current: SearchState,
    counters: Counters,
    random_generator: SmallRng,
}

impl HillClimbing {
    /// The best improving neighbour of the current state, or `None` if the
    /// current state is a local optimum.
    ///
    /// Neighbours are enumerated column by column, rows in ascending order.
    /// Only candidates which are strictly better than the best one seen so
    /// far are picked up, so on ties the first candidate found wins.
    fn best_neighbour(&self) -> Option<SearchState> {
        let mut best: Option<SearchState> = None;
        let mut best_cost = self.current.attacking_pairs();

        for column in 0..self.dimension {
            let occupied_row = self.current.queen_row(column);

            for row in 0..self.dimension {
                if row == occupied_row {
                    continue;
                }

                let neighbour = self.current.with_queen_moved(column, row);

                if neighbour.attacking_pairs() < best_cost {
                    best_cost = neighbour.attacking_pairs();
                    best = Some(neighbour);
                }
            }
        }

        best
    }
}

impl LocalSearch for HillClimbing {
    const MAXIMUM_DIMENSION: usize = 40;

    fn with_options(dimension: usize, mut options: SearchOptions) -> HillClimbing {
        if dimension >= SLOW_CONVERGENCE_DIMENSION {
            warn!("hill climbing on a board of size {dimension} can take tens of seconds to converge");
        }

        let current = SearchState::for_random_placement(dimension, &mut options.random_generator);

        HillClimbing {
            dimension,
            current,
            counters: Counters::default(),
            random_generator: options.random_generator,
        }
    }

    fn solve(&mut self, termination: &mut impl TerminationCondition) -> SearchResult {
        loop {
            if termination.should_stop() {
                return SearchResult::Unknown;
            }

            if self.current.is_solution() {
                return SearchResult::Solved(Solution::new(self.current.queen_rows().to_vec()));
            }

            match self.best_neighbour() {
                Some(neighbour) => {
                    self.current = neighbour;
                    self.counters.num_state_changes += 1;
                }
                None => {
                    debug!(
                        "local optimum at {} attacking pairs; restarting",
                        self.current.attacking_pairs()
                    );

                    self.current =
                        SearchState::for_random_placement(self.dimension, &mut self.random_generator);
                    self.counters.num_restarts += 1;
                }
            }
        }
    }

    fn log_statistics(&self) {
        self.counters.log_statistics();
    }
}
