//! Core domain types for n-in-a-row games.

use serde::{Deserialize, Serialize};

/// Identity of a player within one game.
///
/// Ids are indices into the game's player list, handed out in insertion
/// order. Two players with the same symbol still have distinct ids, so
/// ownership checks never compare symbols.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("Player {}", _0)]
pub struct PlayerId(pub usize);

impl PlayerId {
    /// Returns the position of this player in the turn order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A registered player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    symbol: char,
}

impl Player {
    pub(crate) fn new(id: PlayerId, symbol: char) -> Self {
        Self { id, symbol }
    }

    /// Returns the player's identity.
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Returns the display character for this player's cells.
    pub fn symbol(&self) -> char {
        self.symbol
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.id, self.symbol)
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Unowned cell.
    #[default]
    Empty,
    /// Cell owned by a player.
    Occupied(PlayerId),
}

impl Square {
    /// Returns the owner, if any.
    pub fn owner(self) -> Option<PlayerId> {
        match self {
            Square::Empty => None,
            Square::Occupied(id) => Some(id),
        }
    }

    /// Checks whether the cell is owned by `player`.
    pub fn is_owned_by(self, player: PlayerId) -> bool {
        self == Square::Occupied(player)
    }

    /// Checks whether the cell is unowned.
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }
}

/// Which half of a cell identifier an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Axis {
    /// The row letter.
    #[display("ROW")]
    Row,
    /// The column digit.
    #[display("COLUMN")]
    Column,
}

/// Current status of the game, derived from the winner and draw flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// No outcome yet.
    InProgress,
    /// Game ended in a win.
    Won(PlayerId),
    /// Board filled with no winner.
    Drawn,
}

impl GameStatus {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameStatus::Won(id) => Some(*id),
            _ => None,
        }
    }

    /// Checks whether the game has an outcome.
    pub fn is_decided(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(id) => write!(f, "{} wins", id),
            GameStatus::Drawn => write!(f, "Draw"),
        }
    }
}
