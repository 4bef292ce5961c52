//! Game state: board, players, turn pointer and outcome.
//!
//! This layer stores and mutates without enforcing play rules. The
//! [`Controller`](crate::Controller) owns a `GameState` and is the only
//! place moves, turn advancement and outcome detection happen.

use crate::board::{Board, MAX_DIMENSION, MIN_DIMENSION};
use crate::error::{BoardError, ConfigError};
use crate::types::{GameStatus, Player, PlayerId, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Complete state of one match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    players: Vec<Player>,
    current_player: usize,
    winner: Option<PlayerId>,
    drawn: bool,
    win_threshold: usize,
    started: bool,
}

impl GameState {
    /// Creates a game with an empty `rows` x `cols` board and no players.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if either dimension is outside
    /// `MIN_DIMENSION..=MAX_DIMENSION` or the threshold is zero.
    #[instrument]
    pub fn new(rows: usize, cols: usize, win_threshold: usize) -> Result<Self, ConfigError> {
        for (name, value) in [("rows", rows), ("columns", cols)] {
            if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&value) {
                return Err(ConfigError::new(format!(
                    "{} must be between {} and {}, got {}",
                    name, MIN_DIMENSION, MAX_DIMENSION, value
                )));
            }
        }
        if win_threshold == 0 {
            return Err(ConfigError::new("win threshold must be at least 1"));
        }

        Ok(Self {
            board: Board::new(rows, cols),
            players: Vec::new(),
            current_player: 0,
            winner: None,
            drawn: false,
            win_threshold,
            started: false,
        })
    }

    /// Appends a player to the turn order. Symbols need not be unique.
    #[instrument(skip(self))]
    pub fn add_player(&mut self, symbol: char) -> PlayerId {
        let id = PlayerId(self.players.len());
        self.players.push(Player::new(id, symbol));
        debug!(%id, "Player added");
        id
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.board.row_count()
    }

    /// Number of columns.
    pub fn col_count(&self) -> usize {
        self.board.col_count()
    }

    /// Returns the owner of `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::OutOfBounds` off the board.
    pub fn cell_owner(&self, row: usize, col: usize) -> Result<Option<&Player>, BoardError> {
        let square = self
            .board
            .get(row, col)
            .ok_or(BoardError::OutOfBounds { row, col })?;
        Ok(square.owner().and_then(|id| self.player(id)))
    }

    /// Sets or clears the owner of `(row, col)` with no rule checks.
    pub fn set_cell_owner(
        &mut self,
        row: usize,
        col: usize,
        owner: Option<PlayerId>,
    ) -> Result<(), BoardError> {
        let square = owner.map_or(Square::Empty, Square::Occupied);
        self.board.set(row, col, square)
    }

    /// Appends an empty row unless the board is at the maximum height.
    pub fn add_row(&mut self) -> bool {
        self.board.add_row()
    }

    /// Removes the last row if it is empty and not the only one.
    pub fn remove_row(&mut self) -> bool {
        self.board.remove_row()
    }

    /// Appends an empty column unless the board is at the maximum width.
    pub fn add_column(&mut self) -> bool {
        self.board.add_column()
    }

    /// Removes the last column if it is empty and not the only one.
    pub fn remove_column(&mut self) -> bool {
        self.board.remove_column()
    }

    /// Unowns every cell.
    pub fn clear_board(&mut self) {
        self.board.clear();
    }

    /// All players in turn order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Number of registered players.
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Player at position `index` in the turn order.
    pub fn player_at(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Looks up a player by id.
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    /// Index of the player to move.
    pub fn current_player_index(&self) -> usize {
        self.current_player
    }

    /// Sets the index of the player to move.
    pub fn set_current_player_index(&mut self, index: usize) {
        self.current_player = index;
    }

    /// The player to move, if any players are registered.
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player)
    }

    /// The winner, once decided.
    pub fn winner(&self) -> Option<&Player> {
        self.winner.and_then(|id| self.player(id))
    }

    /// Sets or clears the winner.
    pub fn set_winner(&mut self, winner: Option<PlayerId>) {
        self.winner = winner;
    }

    /// Whether the game ended in a draw.
    pub fn is_drawn(&self) -> bool {
        self.drawn
    }

    /// Sets or clears the draw flag.
    pub fn set_drawn(&mut self, drawn: bool) {
        self.drawn = drawn;
    }

    /// Contiguous cells needed to win.
    pub fn win_threshold(&self) -> usize {
        self.win_threshold
    }

    /// Sets the win threshold.
    pub fn set_win_threshold(&mut self, threshold: usize) {
        self.win_threshold = threshold;
    }

    /// Whether any move has landed since construction or the last reset.
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Sets the started flag.
    pub fn set_started(&mut self, started: bool) {
        self.started = started;
    }

    /// Whether a winner or draw has been recorded.
    pub fn is_decided(&self) -> bool {
        self.winner.is_some() || self.drawn
    }

    /// Outcome so far.
    pub fn status(&self) -> GameStatus {
        match (self.winner, self.drawn) {
            (Some(id), _) => GameStatus::Won(id),
            (None, true) => GameStatus::Drawn,
            (None, false) => GameStatus::InProgress,
        }
    }

    /// Formats the board using each player's symbol.
    pub fn render(&self) -> String {
        self.board.render(&self.players)
    }
}
