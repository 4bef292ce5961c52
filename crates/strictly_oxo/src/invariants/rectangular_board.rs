//! Board shape invariant: rectangular and within dimension bounds.

use super::Invariant;
use crate::board::{MAX_DIMENSION, MIN_DIMENSION};
use crate::state::GameState;

/// Invariant: every row has the same width and both dimensions stay in
/// `MIN_DIMENSION..=MAX_DIMENSION`.
pub struct RectangularBoardInvariant;

impl Invariant<GameState> for RectangularBoardInvariant {
    fn holds(game: &GameState) -> bool {
        let bounds = MIN_DIMENSION..=MAX_DIMENSION;
        game.board().is_rectangular()
            && bounds.contains(&game.row_count())
            && bounds.contains(&game.col_count())
    }

    fn description() -> &'static str {
        "Board is rectangular with 1-9 rows and columns"
    }
}
