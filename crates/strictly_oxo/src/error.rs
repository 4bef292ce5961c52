//! Error types.

use crate::types::Axis;
use derive_more::{Display, Error};
use tracing::instrument;

/// Reason a move command was rejected.
///
/// Raised only by [`Controller::submit_move`](crate::Controller::submit_move).
/// Nothing is mutated before one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Command is not exactly two characters long.
    #[display("Identifier must be 2 characters long, got {}", length)]
    InvalidIdentifierLength {
        /// Number of characters in the command.
        length: usize,
    },

    /// Row character is not a letter, or column character is not a digit.
    #[display("Invalid {} character '{}'", axis, character)]
    InvalidIdentifierCharacter {
        /// Which half of the identifier was malformed.
        axis: Axis,
        /// The offending character.
        character: char,
    },

    /// Identifier names a row or column outside the current board.
    ///
    /// Rows report the zero-based index, columns the one-based number typed.
    #[display("{} {} is outside the board", axis, index)]
    OutsideCellRange {
        /// Which axis was out of range.
        axis: Axis,
        /// The out-of-range value.
        index: usize,
    },

    /// Target cell already has an owner.
    #[display("Cell at row {} column {} is already taken", row, col)]
    CellAlreadyTaken {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        col: usize,
    },
}

/// Direct cell access outside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Row or column index past the current edge.
    #[display("Cell ({}, {}) is out of bounds", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
