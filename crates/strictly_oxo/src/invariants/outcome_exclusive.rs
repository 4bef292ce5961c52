//! Outcome exclusivity: a game is never both won and drawn.

use super::Invariant;
use crate::state::GameState;

/// Invariant: at most one of {winner set, draw flag} holds.
pub struct OutcomeExclusiveInvariant;

impl Invariant<GameState> for OutcomeExclusiveInvariant {
    fn holds(game: &GameState) -> bool {
        !(game.winner().is_some() && game.is_drawn())
    }

    fn description() -> &'static str {
        "A game is never both won and drawn"
    }
}
