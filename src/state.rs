//! The state a search driver operates on: a complete placement of queens
//! together with a cached conflict count.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::board::Board;
use crate::board::Direction;
use crate::gambit_assert_extreme;
use crate::gambit_assert_moderate;
use crate::gambit_assert_simple;

/// A complete placement of N queens, one per column, together with the cached
/// number of attacking pairs.
///
/// States are values. Candidate neighbours are produced with
/// [`SearchState::with_queen_moved`], which copies the state, so a partially
/// evaluated candidate can never corrupt the state it was derived from; a
/// driver commits a candidate by replacing its current state wholesale, and
/// rejected candidates are released when they go out of scope.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchState {
    board: Board,
    /// The row of the queen in each column; kept in sync with `board`.
    queen_rows: Vec<usize>,
    /// The number of pairs of queens which attack each other.
    attacking_pairs: u32,
}

impl SearchState {
    /// Creates a state in which the queen of every column is assigned a
    /// uniformly random row. Rows are drawn independently, so they may repeat
    /// across columns.
    pub fn for_random_placement(dimension: usize, random: &mut SmallRng) -> SearchState {
        gambit_assert_simple!(dimension >= 1);

        let queen_rows: Vec<usize> = (0..dimension)
            .map(|_| random.gen_range(0..dimension))
            .collect();

        let mut board = Board::empty(dimension);
        for (column, &row) in queen_rows.iter().enumerate() {
            board.place(row, column);
        }

        let mut state = SearchState {
            board,
            queen_rows,
            attacking_pairs: 0,
        };
        state.attacking_pairs = state.count_attacking_pairs();

        state
    }

    /// Creates a copy of this state in which the queen of `column` is moved
    /// to `new_row`. All other columns are untouched, and `self` is not
    /// modified.
    ///
    /// The cached pair count of the copy is maintained incrementally: the
    /// pairs involving the queen on its old square are subtracted and the
    /// pairs on its new square are added, which costs one board scan per
    /// direction rather than one per queen.
    pub fn with_queen_moved(&self, column: usize, new_row: usize) -> SearchState {
        gambit_assert_simple!(column < self.dimension() && new_row < self.dimension());

        let mut next = self.clone();

        let removed = next.attacks_on_queen(column);
        gambit_assert_moderate!(removed <= next.attacking_pairs);

        next.board.clear(next.queen_rows[column], column);
        next.board.place(new_row, column);
        next.queen_rows[column] = new_row;

        let added = next.attacks_on_queen(column);
        next.attacking_pairs = next.attacking_pairs - removed + added;

        gambit_assert_extreme!(next.attacking_pairs == next.count_attacking_pairs());

        next
    }

    pub fn dimension(&self) -> usize {
        self.board.dimension()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The row of the queen in the given column.
    pub fn queen_row(&self, column: usize) -> usize {
        self.queen_rows[column]
    }

    /// The rows of all queens, indexed by column.
    pub fn queen_rows(&self) -> &[usize] {
        &self.queen_rows
    }

    /// The cached number of attacking pairs. Zero iff no two queens share a
    /// row or a diagonal, i.e. iff this placement is a solution.
    pub fn attacking_pairs(&self) -> u32 {
        self.attacking_pairs
    }

    pub fn is_solution(&self) -> bool {
        self.attacking_pairs == 0
    }

    /// The number of other queens which attack the queen in `column`,
    /// scanning all six attack directions.
    pub fn attacks_on_queen(&self, column: usize) -> u32 {
        let row = self.queen_rows[column];

        Direction::ALL
            .iter()
            .map(|&direction| self.board.occupied_along(direction, row, column))
            .sum()
    }

    /// Counts the attacking pairs from scratch by scanning the three
    /// rightward-looking directions from every queen, which visits every pair
    /// exactly once.
    fn count_attacking_pairs(&self) -> u32 {
        (0..self.dimension())
            .map(|column| {
                let row = self.queen_rows[column];

                Direction::FORWARD
                    .iter()
                    .map(|&direction| self.board.occupied_along(direction, row, column))
                    .sum::<u32>()
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use super::SearchState;

    /// Builds a state with the given queen rows by moving the queens of a
    /// random placement into position column by column.
    fn state_with_rows(queen_rows: &[usize]) -> SearchState {
        let mut random = SmallRng::seed_from_u64(0);
        let mut state = SearchState::for_random_placement(queen_rows.len(), &mut random);

        for (column, &row) in queen_rows.iter().enumerate() {
            state = state.with_queen_moved(column, row);
        }

        state
    }

    #[test]
    fn random_placements_have_one_queen_per_column() {
        let mut random = SmallRng::seed_from_u64(42);

        for seed_round in 0..20 {
            let dimension = 4 + seed_round % 8;
            let state = SearchState::for_random_placement(dimension, &mut random);

            for column in 0..dimension {
                let occupied: Vec<usize> = (0..dimension)
                    .filter(|&row| state.board().is_occupied(row, column))
                    .collect();

                assert_eq!(occupied, vec![state.queen_row(column)]);
            }
        }
    }

    #[test]
    fn known_solution_has_no_attacking_pairs() {
        let state = state_with_rows(&[1, 3, 5, 7, 2, 0, 6, 4]);

        assert!(state.is_solution());
        assert_eq!(state.attacking_pairs(), 0);

        for column in 0..state.dimension() {
            assert_eq!(state.attacks_on_queen(column), 0);
        }
    }

    #[test]
    fn queens_on_a_single_row_all_attack_each_other() {
        let state = state_with_rows(&[0, 0, 0, 0]);

        // 4 choose 2 pairs, and every queen is attacked by the 3 others.
        assert_eq!(state.attacking_pairs(), 6);
        for column in 0..4 {
            assert_eq!(state.attacks_on_queen(column), 3);
        }
    }

    #[test]
    fn symmetric_attack_counts_are_twice_the_pair_count() {
        let mut random = SmallRng::seed_from_u64(7);

        for _ in 0..20 {
            let state = SearchState::for_random_placement(10, &mut random);

            let symmetric_total: u32 = (0..state.dimension())
                .map(|column| state.attacks_on_queen(column))
                .sum();

            assert_eq!(symmetric_total, 2 * state.attacking_pairs());
        }
    }

    #[test]
    fn with_queen_moved_does_not_modify_its_input() {
        let state = state_with_rows(&[2, 0, 3, 1, 2]);
        let snapshot = state.clone();

        let neighbour = state.with_queen_moved(2, 0);

        assert_eq!(state, snapshot);
        assert_eq!(neighbour.queen_row(2), 0);
        assert_eq!(state.queen_row(2), 3);
    }

    #[test]
    fn cached_pair_count_survives_arbitrary_move_sequences() {
        // The extreme-level assert in `with_queen_moved` compares the
        // incrementally maintained count against a full recount on every
        // move, so driving a long random walk exercises it.
        let mut random = SmallRng::seed_from_u64(13);
        let mut state = SearchState::for_random_placement(8, &mut random);

        for step in 0..200 {
            let column = step % 8;
            let row = (step * 5 + 3) % 8;
            state = state.with_queen_moved(column, row);
        }

        assert_eq!(state.queen_rows().len(), 8);
    }
}
