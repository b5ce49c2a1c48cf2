//! Randomized min-conflicts repair search.

use log::debug;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::options::SearchOptions;
use crate::results::SearchResult;
use crate::results::Solution;
use crate::runner::LocalSearch;
use crate::search::Counters;
use crate::state::SearchState;
use crate::termination::TerminationCondition;

/// The number of committed moves, as a multiple of the board size, after
/// which a search which has not reached a solution restarts from a fresh
/// random placement.
const RESTART_PATIENCE_FACTOR: usize = 3;

/// A randomized min-conflicts repair search.
///
/// Every iteration moves the queen which is under the most attack to the row
/// of its column which leaves it under the least attack, choosing uniformly
/// at random among tying columns and among tying rows. A search which has
/// not converged within 3N moves restarts from a fresh random placement.
///
/// An iteration costs one conflict scan per queen plus one per candidate
/// row, so this driver takes on much larger boards than
/// [`crate::search::HillClimbing`].
#[derive(Debug)]
pub struct MinConflicts {
    dimension: usize,
    current: SearchState,
    counters: Counters,
    random_generator: SmallRng,
    moves_since_restart: usize,
}

impl MinConflicts {
    /// The column whose queen is under the most attack, or `None` if no queen
    /// is attacked at all. Ties are broken uniformly at random.
    fn most_attacked_column(&mut self) -> Option<usize> {
        let mut most_attacked: Vec<usize> = Vec::new();
        let mut maximum = 0;

        for column in 0..self.dimension {
            let attacks = self.current.attacks_on_queen(column);

            if attacks > maximum {
                maximum = attacks;
                most_attacked.clear();
                most_attacked.push(column);
            } else if attacks == maximum && maximum > 0 {
                most_attacked.push(column);
            }
        }

        if most_attacked.is_empty() {
            return None;
        }

        let index = self.random_generator.gen_range(0..most_attacked.len());
        Some(most_attacked[index])
    }

    /// The state in which the queen of `column` occupies the row which leaves
    /// it under the least attack. All rows are candidates, including the one
    /// the queen currently occupies; ties are broken uniformly at random
    /// among all minimal rows.
    fn queen_moved_to_least_attacked_row(&mut self, column: usize) -> SearchState {
        let mut least_attacked: Vec<SearchState> = Vec::new();
        let mut minimum = u32::MAX;

        for row in 0..self.dimension {
            let candidate = self.current.with_queen_moved(column, row);
            let attacks = candidate.attacks_on_queen(column);

            if attacks < minimum {
                minimum = attacks;
                least_attacked.clear();
                least_attacked.push(candidate);
            } else if attacks == minimum {
                least_attacked.push(candidate);
            }
        }

        let index = self.random_generator.gen_range(0..least_attacked.len());
        least_attacked.swap_remove(index)
    }
}

impl LocalSearch for MinConflicts {
    const MAXIMUM_DIMENSION: usize = 100;

    fn with_options(dimension: usize, mut options: SearchOptions) -> MinConflicts {
        let current = SearchState::for_random_placement(dimension, &mut options.random_generator);

        MinConflicts {
            dimension,
            current,
            counters: Counters::default(),
            random_generator: options.random_generator,
            moves_since_restart: 0,
        }
    }

    fn solve(&mut self, termination: &mut impl TerminationCondition) -> SearchResult {
        loop {
            if termination.should_stop() {
                return SearchResult::Unknown;
            }

            let Some(column) = self.most_attacked_column() else {
                return SearchResult::Solved(Solution::new(self.current.queen_rows().to_vec()));
            };

            if self.moves_since_restart == RESTART_PATIENCE_FACTOR * self.dimension {
                debug!(
                    "no solution within {} moves; restarting",
                    self.moves_since_restart
                );

                self.current =
                    SearchState::for_random_placement(self.dimension, &mut self.random_generator);
                self.counters.num_restarts += 1;
                self.moves_since_restart = 0;

                continue;
            }

            self.current = self.queen_moved_to_least_attacked_row(column);
            self.counters.num_state_changes += 1;
            self.moves_since_restart += 1;
        }
    }

    fn log_statistics(&self) {
        self.counters.log_statistics();
    }
}

#[cfg(test)]
mod tests {
    use super::MinConflicts;
    use crate::options::SearchOptions;
    use crate::runner::LocalSearch;

    #[test]
    fn most_attacked_column_attains_the_maximum() {
        for seed in 0..20 {
            let mut search = MinConflicts::with_options(8, SearchOptions::with_seed(seed));

            let Some(column) = search.most_attacked_column() else {
                continue;
            };

            let maximum = (0..8)
                .map(|other| search.current.attacks_on_queen(other))
                .max()
                .unwrap();

            assert_eq!(search.current.attacks_on_queen(column), maximum);
        }
    }

    #[test]
    fn chosen_row_minimises_the_attacks_on_the_moved_queen() {
        for seed in 0..20 {
            let mut search = MinConflicts::with_options(8, SearchOptions::with_seed(seed));

            let Some(column) = search.most_attacked_column() else {
                continue;
            };

            let committed = search.queen_moved_to_least_attacked_row(column);

            let minimum = (0..8)
                .map(|row| {
                    search
                        .current
                        .with_queen_moved(column, row)
                        .attacks_on_queen(column)
                })
                .min()
                .unwrap();

            assert_eq!(committed.attacks_on_queen(column), minimum);
        }
    }
}
