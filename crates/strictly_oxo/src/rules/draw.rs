//! Draw detection.

use crate::board::Board;
use tracing::instrument;

/// Checks if the board is full (all cells owned).
///
/// Only meaningful once the win check for the last move has failed.
#[instrument(skip(board), fields(rows = board.row_count(), cols = board.col_count()))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}
