//! Win detection for n-in-a-row.
//!
//! A player wins with `threshold` contiguous owned cells along a row, a
//! column, or either diagonal. Each direction is scanned one line at a
//! time with a run-length counter, so every call visits each cell at most
//! four times.

use crate::board::Board;
use crate::types::PlayerId;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A line orientation on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
pub enum Direction {
    /// Along a row (`a1`, `a2`, `a3`).
    Horizontal,
    /// Down a column (`a1`, `b1`, `c1`).
    Vertical,
    /// Down and right (`a1`, `b2`, `c3`).
    Diagonal,
    /// Down and left (`a3`, `b2`, `c1`).
    AntiDiagonal,
}

impl Direction {
    /// Row and column delta for one step along the line.
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }
}

/// Moves one step from `(row, col)` by `(dr, dc)`, or `None` off the board.
fn offset(
    board: &Board,
    (row, col): (usize, usize),
    (dr, dc): (isize, isize),
) -> Option<(usize, usize)> {
    let row = row.checked_add_signed(dr)?;
    let col = col.checked_add_signed(dc)?;
    (row < board.row_count() && col < board.col_count()).then_some((row, col))
}

/// Checks for `threshold` contiguous cells owned by `player` in one direction.
///
/// Lines are walked from every cell with no predecessor in `direction`, so
/// a run is found wherever it starts.
#[instrument(skip(board))]
pub fn has_run(board: &Board, player: PlayerId, threshold: usize, direction: Direction) -> bool {
    let (dr, dc) = direction.step();

    board
        .cells()
        .map(|(r, c, _)| (r, c))
        .filter(|&start| offset(board, start, (-dr, -dc)).is_none())
        .any(|start| {
            let mut run = 0;
            std::iter::successors(Some(start), |&pos| offset(board, pos, (dr, dc))).any(|(r, c)| {
                if board.get(r, c).is_some_and(|s| s.is_owned_by(player)) {
                    run += 1;
                } else {
                    run = 0;
                }
                run >= threshold
            })
        })
}

/// Returns the first direction in which `player` has a winning run.
#[instrument(skip(board))]
pub fn check_winner(board: &Board, player: PlayerId, threshold: usize) -> Option<Direction> {
    Direction::iter().find(|&direction| has_run(board, player, threshold, direction))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;

    const X: PlayerId = PlayerId(0);
    const O: PlayerId = PlayerId(1);

    fn board_with(rows: usize, cols: usize, cells: &[(usize, usize, PlayerId)]) -> Board {
        let mut board = Board::new(rows, cols);
        for &(r, c, p) in cells {
            board.set(r, c, Square::Occupied(p)).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new(3, 3);
        assert_eq!(check_winner(&board, X, 3), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(3, 3, &[(0, 0, X), (0, 1, X), (0, 2, X)]);
        assert_eq!(check_winner(&board, X, 3), Some(Direction::Horizontal));
        assert_eq!(check_winner(&board, O, 3), None);
    }

    #[test]
    fn test_winner_column() {
        let board = board_with(4, 4, &[(1, 3, O), (2, 3, O), (3, 3, O)]);
        assert_eq!(check_winner(&board, O, 3), Some(Direction::Vertical));
    }

    #[test]
    fn test_run_is_broken_by_other_player() {
        let board = board_with(1, 5, &[(0, 0, X), (0, 1, X), (0, 2, O), (0, 3, X), (0, 4, X)]);
        assert!(!has_run(&board, X, 3, Direction::Horizontal));
        assert!(has_run(&board, X, 2, Direction::Horizontal));
    }

    #[test]
    fn test_diagonal_starting_mid_board() {
        let board = board_with(6, 6, &[(2, 1, X), (3, 2, X), (4, 3, X), (5, 4, X)]);
        assert!(has_run(&board, X, 4, Direction::Diagonal));
        assert!(!has_run(&board, X, 5, Direction::Diagonal));
    }

    #[test]
    fn test_anti_diagonal_starting_mid_board() {
        let board = board_with(5, 7, &[(1, 5, O), (2, 4, O), (3, 3, O)]);
        assert_eq!(check_winner(&board, O, 3), Some(Direction::AntiDiagonal));
    }

    #[test]
    fn test_diagonal_run_after_a_gap() {
        // X at (0,0), gap at (1,1), then (2,2)..(4,4).
        let board = board_with(5, 5, &[(0, 0, X), (1, 1, O), (2, 2, X), (3, 3, X), (4, 4, X)]);
        assert!(has_run(&board, X, 3, Direction::Diagonal));
        assert!(!has_run(&board, X, 4, Direction::Diagonal));
    }

    #[test]
    fn test_threshold_longer_than_any_line() {
        let board = board_with(2, 2, &[(0, 0, X), (0, 1, X), (1, 0, X), (1, 1, X)]);
        assert_eq!(check_winner(&board, X, 3), None);
        assert!(check_winner(&board, X, 2).is_some());
    }

    #[test]
    fn test_single_cell_threshold() {
        let board = board_with(3, 3, &[(1, 1, X)]);
        assert!(check_winner(&board, X, 1).is_some());
    }
}
