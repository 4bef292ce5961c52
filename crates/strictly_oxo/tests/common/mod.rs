//! Shared helpers for integration tests.

#![allow(dead_code)]

use strictly_oxo::{Controller, GameState, MoveError};
use tracing_subscriber::EnvFilter;

/// Installs a test-friendly subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

/// Builds a controller with players registered in the order given.
pub fn controller(rows: usize, cols: usize, threshold: usize, symbols: &[char]) -> Controller {
    init_tracing();
    let mut state = GameState::new(rows, cols, threshold).expect("valid dimensions");
    for &symbol in symbols {
        state.add_player(symbol);
    }
    Controller::new(state)
}

/// The standard 3x3, three-in-a-row, X-then-O game.
pub fn standard() -> Controller {
    controller(3, 3, 3, &['X', 'O'])
}

/// Submits each command in turn, stopping at the first error.
pub fn play(controller: &mut Controller, commands: &[&str]) -> Result<(), MoveError> {
    commands.iter().try_for_each(|cmd| controller.submit_move(cmd))
}

/// Symbol of the owner of `(row, col)`, if any.
pub fn owner_symbol(controller: &Controller, row: usize, col: usize) -> Option<char> {
    controller
        .state()
        .cell_owner(row, col)
        .expect("cell on board")
        .map(|p| p.symbol())
}

/// Symbol of the winner, if any.
pub fn winner_symbol(controller: &Controller) -> Option<char> {
    controller.state().winner().map(|p| p.symbol())
}
