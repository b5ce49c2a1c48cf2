//! Drives a [`LocalSearch`] as a command-line program.

use std::time::Duration;
use std::time::Instant;

use clap::Parser;
use thiserror::Error;

use crate::options::SearchOptions;
use crate::results::SearchResult;
use crate::results::Solution;
use crate::statistics::configure;
use crate::statistics::log_statistic;
use crate::termination::Indefinite;
use crate::termination::TerminationCondition;
use crate::termination::TimeBudget;

/// Boards larger than this are reported as solved without printing the grid.
const DISPLAY_THRESHOLD: usize = 1000;

#[derive(Debug, Parser)]
struct Cli {
    /// The size of the board, i.e. the number of queens to place.
    #[arg(allow_negative_numbers = true)]
    n: i64,

    /// Seed for the random generator.
    ///
    /// If no seed is provided, the generator is seeded from operating-system
    /// entropy and every run draws an independent placement sequence.
    #[arg(long)]
    random_seed: Option<u64>,

    /// The number of seconds the search is allowed to run.
    ///
    /// If no time-out is provided, the search runs until a solution is
    /// found.
    #[arg(long)]
    time_out: Option<u64>,
}

/// Definition of a local-search algorithm which can be driven by [`run`].
pub trait LocalSearch: Sized {
    /// The largest board size the algorithm is prepared to take on.
    const MAXIMUM_DIMENSION: usize;

    /// Creates the algorithm for a `dimension`×`dimension` board, with an
    /// initial placement drawn from the options' random generator.
    fn with_options(dimension: usize, options: SearchOptions) -> Self;

    /// Runs the search until a solution is found or `termination` fires.
    fn solve(&mut self, termination: &mut impl TerminationCondition) -> SearchResult;

    /// Logs the search statistics through [`crate::statistics`].
    fn log_statistics(&self);
}

/// The board size lies outside the supported range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DimensionError {
    #[error("Input too small")]
    TooSmall,
    #[error("Input too large")]
    TooLarge,
}

pub(crate) fn validate_dimension(n: i64, maximum: usize) -> Result<usize, DimensionError> {
    if n < 1 {
        Err(DimensionError::TooSmall)
    } else if n > maximum as i64 {
        Err(DimensionError::TooLarge)
    } else {
        Ok(n as usize)
    }
}

#[macro_export]
macro_rules! entry_point {
    (algorithm = $algorithm:ident) => {
        fn main() -> anyhow::Result<()> {
            $crate::runner::run::<$algorithm>()
        }
    };
}

/// Parses the requested board size, handles the degenerate sizes, runs the
/// search, and prints the outcome and statistics.
///
/// Boards of size 1 are trivially solved without searching, and boards of
/// size 2 and 3 provably have no solution, so no search is attempted for
/// them either.
pub fn run<Algorithm: LocalSearch>() -> anyhow::Result<()> {
    env_logger::init();
    configure(true, "%% ");

    let args = Cli::parse();
    let started_at = Instant::now();

    let dimension = match validate_dimension(args.n, Algorithm::MAXIMUM_DIMENSION) {
        Ok(dimension) => dimension,
        Err(error) => {
            println!("{error}");
            return Ok(());
        }
    };

    let result = match dimension {
        1 => SearchResult::Solved(Solution::new(vec![0])),
        2 | 3 => SearchResult::Unsatisfiable,
        _ => {
            let options = match args.random_seed {
                Some(seed) => SearchOptions::with_seed(seed),
                None => SearchOptions::from_entropy(),
            };

            let mut search = Algorithm::with_options(dimension, options);

            let result = match args.time_out {
                Some(seconds) => {
                    let mut time_budget =
                        TimeBudget::starting_now(Duration::from_secs(seconds));
                    search.solve(&mut time_budget)
                }
                None => search.solve(&mut Indefinite),
            };

            search.log_statistics();

            result
        }
    };

    match result {
        SearchResult::Solved(solution) => {
            if solution.dimension() <= DISPLAY_THRESHOLD {
                println!("{solution}");
            } else {
                println!("Solution found");
            }
        }
        SearchResult::Unsatisfiable => println!("No solution found"),
        SearchResult::Unknown => println!("Timeout."),
    }

    log_statistic(
        "timeSpentInSearchInSeconds",
        started_at.elapsed().as_secs_f64(),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate_dimension;
    use super::DimensionError;

    #[test]
    fn dimensions_within_bounds_are_accepted() {
        assert_eq!(validate_dimension(1, 40), Ok(1));
        assert_eq!(validate_dimension(40, 40), Ok(40));
        assert_eq!(validate_dimension(100, 100), Ok(100));
    }

    #[test]
    fn dimensions_below_one_are_too_small() {
        assert_eq!(validate_dimension(0, 40), Err(DimensionError::TooSmall));
        assert_eq!(validate_dimension(-7, 40), Err(DimensionError::TooSmall));
    }

    #[test]
    fn dimensions_above_the_maximum_are_too_large() {
        assert_eq!(validate_dimension(41, 40), Err(DimensionError::TooLarge));
        assert_eq!(validate_dimension(101, 100), Err(DimensionError::TooLarge));
    }

    #[test]
    fn range_errors_render_the_user_facing_messages() {
        assert_eq!(DimensionError::TooSmall.to_string(), "Input too small");
        assert_eq!(DimensionError::TooLarge.to_string(), "Input too large");
    }
}
