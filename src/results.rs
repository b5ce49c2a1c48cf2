//! The outcomes a search driver can produce.

use std::fmt;

/// The result of running a search driver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchResult {
    /// A conflict-free placement was found.
    Solved(Solution),
    /// No solution exists for the requested board size.
    Unsatisfiable,
    /// The termination condition fired before a solution was found.
    Unknown,
}

/// A conflict-free placement of N queens, one per column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    queen_rows: Vec<usize>,
}

impl Solution {
    pub(crate) fn new(queen_rows: Vec<usize>) -> Solution {
        Solution { queen_rows }
    }

    pub fn dimension(&self) -> usize {
        self.queen_rows.len()
    }

    /// The row of the queen in the given column.
    pub fn queen_row(&self, column: usize) -> usize {
        self.queen_rows[column]
    }
}

/// Renders the board grid row-major, one line per row, with space-separated
/// 0/1 occupancy values.
impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dimension = self.queen_rows.len();

        for row in 0..dimension {
            for column in 0..dimension {
                if column > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", u8::from(self.queen_rows[column] == row))?;
            }

            if row + 1 < dimension {
                writeln!(f)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Solution;

    #[test]
    fn grid_is_rendered_row_major() {
        let solution = Solution::new(vec![1, 3, 0, 2]);

        assert_eq!(
            solution.to_string(),
            "0 0 1 0\n1 0 0 0\n0 0 0 1\n0 1 0 0"
        );
    }

    #[test]
    fn trivial_board_renders_as_a_single_cell() {
        let solution = Solution::new(vec![0]);

        assert_eq!(solution.to_string(), "1");
    }
}
