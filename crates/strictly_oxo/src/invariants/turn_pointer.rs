//! Turn pointer invariant: the current player index names a real player.

use super::Invariant;
use crate::state::GameState;

/// Invariant: the current-player index is a valid player index.
///
/// With no players registered the index must be zero.
pub struct TurnPointerInvariant;

impl Invariant<GameState> for TurnPointerInvariant {
    fn holds(game: &GameState) -> bool {
        match game.player_count() {
            0 => game.current_player_index() == 0,
            n => game.current_player_index() < n,
        }
    }

    fn description() -> &'static str {
        "Current player index points at a registered player"
    }
}
