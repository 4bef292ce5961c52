//! Strictly OXO - n-in-a-row grid game logic.
//!
//! A generalized tic-tac-toe: boards from 1x1 to 9x9, any number of
//! players taking turns in insertion order, and a configurable number of
//! contiguous cells needed to win along a row, column or diagonal.
//!
//! # Architecture
//!
//! - **State**: [`GameState`] stores the board, players, turn pointer and outcome
//! - **Controller**: [`Controller`] owns a state, validates text commands
//!   like `"b2"`, applies them and detects wins and draws
//! - **Rules**: pure win and draw checks over a [`Board`]
//! - **Config**: [`GameConfig`] builds a ready-to-play controller from TOML
//!
//! # Example
//!
//! ```
//! use strictly_oxo::{Controller, GameState, MoveError};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut state = GameState::new(3, 3, 3)?;
//! state.add_player('X');
//! state.add_player('O');
//! let mut controller = Controller::new(state);
//!
//! for cmd in ["a1", "b1", "a2", "b2", "a3"] {
//!     controller.submit_move(cmd)?;
//! }
//! assert_eq!(controller.state().winner().map(|p| p.symbol()), Some('X'));
//!
//! assert!(matches!(
//!     controller.submit_move("z1"),
//!     Err(MoveError::OutsideCellRange { .. })
//! ));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod command;
mod config;
mod controller;
mod error;
mod state;
mod types;

pub mod invariants;
pub mod rules;

pub use board::{Board, MAX_DIMENSION, MIN_DIMENSION};
pub use command::CellRef;
pub use config::GameConfig;
pub use controller::{Controller, MIN_DECREASABLE_THRESHOLD};
pub use error::{BoardError, ConfigError, MoveError};
pub use state::GameState;
pub use types::{Axis, GameStatus, Player, PlayerId, Square};
