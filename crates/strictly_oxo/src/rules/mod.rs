//! Game rules for n-in-a-row.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are separated
//! from storage so the controller can compose them after each move.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{Direction, check_winner, has_run};
