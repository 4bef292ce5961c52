//! Move controller: validates commands, applies moves, detects outcomes.

use crate::board::MIN_DIMENSION;
use crate::command::CellRef;
use crate::error::{BoardError, MoveError};
use crate::invariants::assert_invariants;
use crate::rules;
use crate::state::GameState;
use crate::types::{Axis, Player, PlayerId};
use tracing::{debug, info, instrument, warn};

/// The win threshold is never decreased below this value.
pub const MIN_DECREASABLE_THRESHOLD: usize = 3;

/// Drives a [`GameState`] it exclusively owns.
///
/// All rule enforcement lives here: command validation, turn order, win
/// and draw detection, and the policies around resizing the board and
/// changing the win threshold.
#[derive(Debug, Clone)]
pub struct Controller {
    state: GameState,
}

impl Controller {
    /// Wraps a game state. Players should already be registered.
    #[instrument(skip(state), fields(players = state.player_count()))]
    pub fn new(state: GameState) -> Self {
        Self { state }
    }

    /// Returns the game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Releases the game state.
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Submits a move such as `"a1"` for the player whose turn it is.
    ///
    /// Checks run in a fixed order: length, row character, column
    /// character, row bounds, column bounds, occupancy. If the game is
    /// already won or drawn, a valid command is accepted and ignored.
    ///
    /// # Errors
    ///
    /// Returns the first failing check as a [`MoveError`]. Nothing is
    /// mutated when an error is returned.
    #[instrument(skip(self), fields(player = self.state.current_player_index()))]
    pub fn submit_move(&mut self, command: &str) -> Result<(), MoveError> {
        let (row, col) =
            CellRef::parse(command)?.resolve(self.state.row_count(), self.state.col_count())?;

        if !self.state.board().is_empty(row, col) {
            return Err(MoveError::CellAlreadyTaken { row, col });
        }

        if self.state.is_decided() {
            debug!(status = %self.state.status(), "Game already decided, ignoring move");
            return Ok(());
        }

        let Some(mover) = self.state.current_player().map(Player::id) else {
            warn!("No players registered, ignoring move");
            return Ok(());
        };

        let rows = self.state.row_count();
        self.state
            .set_cell_owner(row, col, Some(mover))
            .map_err(|err| out_of_range(err, rows))?;
        let next = (self.state.current_player_index() + 1) % self.state.player_count();
        self.state.set_current_player_index(next);
        self.state.set_started(true);
        debug!(%mover, row, col, "Move applied");

        self.update_status(mover);
        assert_invariants(&self.state);
        Ok(())
    }

    /// Records a win for `mover`, or a draw if the board is now full.
    fn update_status(&mut self, mover: PlayerId) {
        let board = self.state.board();
        if let Some(direction) = rules::check_winner(board, mover, self.state.win_threshold()) {
            info!(winner = %mover, %direction, "Winner found");
            self.state.set_winner(Some(mover));
        } else if rules::is_full(board) {
            info!("Board full, game drawn");
            self.state.set_drawn(true);
        }
    }

    /// Appends a row unless the board is already at the maximum height.
    ///
    /// A drawn game becomes undecided again, since there are new cells to
    /// play. A winner is kept.
    #[instrument(skip(self), fields(rows = self.state.row_count()))]
    pub fn add_row(&mut self) {
        if !self.state.add_row() {
            return;
        }
        self.state.set_drawn(false);
        assert_invariants(&self.state);
    }

    /// Removes the last row if it is empty and more than one row remains.
    #[instrument(skip(self), fields(rows = self.state.row_count()))]
    pub fn remove_row(&mut self) {
        if self.state.row_count() <= MIN_DIMENSION {
            debug!("Board already at minimum height");
            return;
        }
        self.state.remove_row();
        assert_invariants(&self.state);
    }

    /// Appends a column unless the board is already at the maximum width.
    ///
    /// Clears the draw flag like [`Controller::add_row`].
    #[instrument(skip(self), fields(cols = self.state.col_count()))]
    pub fn add_column(&mut self) {
        if !self.state.add_column() {
            return;
        }
        self.state.set_drawn(false);
        assert_invariants(&self.state);
    }

    /// Removes the last column if it is empty and more than one column remains.
    #[instrument(skip(self), fields(cols = self.state.col_count()))]
    pub fn remove_column(&mut self) {
        if self.state.col_count() <= MIN_DIMENSION {
            debug!("Board already at minimum width");
            return;
        }
        self.state.remove_column();
        assert_invariants(&self.state);
    }

    /// Raises the win threshold by one.
    #[instrument(skip(self), fields(threshold = self.state.win_threshold()))]
    pub fn increase_win_threshold(&mut self) {
        let threshold = self.state.win_threshold().saturating_add(1);
        self.state.set_win_threshold(threshold);
    }

    /// Lowers the win threshold by one.
    ///
    /// Ignored mid-game (started and undecided) and when the threshold is
    /// already at [`MIN_DECREASABLE_THRESHOLD`] or below.
    #[instrument(skip(self), fields(threshold = self.state.win_threshold()))]
    pub fn decrease_win_threshold(&mut self) {
        if self.state.is_started() && !self.state.is_decided() {
            debug!("Cannot lower the threshold during a game");
            return;
        }
        let threshold = self.state.win_threshold();
        if threshold <= MIN_DECREASABLE_THRESHOLD {
            debug!("Threshold already at minimum");
            return;
        }
        self.state.set_win_threshold(threshold - 1);
    }

    /// Clears the board and outcome and hands the turn back to the first
    /// player. Players, board size and threshold are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.state.clear_board();
        self.state.set_winner(None);
        self.state.set_drawn(false);
        self.state.set_current_player_index(0);
        self.state.set_started(false);
        assert_invariants(&self.state);
    }
}

/// Reports a board access failure in command terms: zero-based rows,
/// one-based columns.
fn out_of_range(err: BoardError, rows: usize) -> MoveError {
    let BoardError::OutOfBounds { row, col } = err;
    if row >= rows {
        MoveError::OutsideCellRange {
            axis: Axis::Row,
            index: row,
        }
    } else {
        MoveError::OutsideCellRange {
            axis: Axis::Column,
            index: col + 1,
        }
    }
}
