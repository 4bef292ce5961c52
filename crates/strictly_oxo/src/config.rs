//! Game configuration loaded from TOML.

use crate::controller::Controller;
use crate::error::ConfigError;
use crate::state::GameState;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a new match.
///
/// ```toml
/// rows = 5
/// columns = 5
/// win_threshold = 4
/// players = ["X", "O", "A"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of rows (1-9).
    #[serde(default = "default_dimension")]
    rows: usize,

    /// Number of columns (1-9).
    #[serde(default = "default_dimension")]
    columns: usize,

    /// Contiguous cells needed to win.
    #[serde(default = "default_win_threshold")]
    win_threshold: usize,

    /// Player symbols in turn order.
    #[serde(default = "default_players")]
    players: Vec<char>,
}

fn default_dimension() -> usize {
    3
}

fn default_win_threshold() -> usize {
    3
}

fn default_players() -> Vec<char> {
    vec!['X', 'O']
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: default_dimension(),
            columns: default_dimension(),
            win_threshold: default_win_threshold(),
            players: default_players(),
        }
    }
}

impl GameConfig {
    /// Creates a configuration.
    #[instrument(skip(players), fields(player_count = players.len()))]
    pub fn new(rows: usize, columns: usize, win_threshold: usize, players: Vec<char>) -> Self {
        Self {
            rows,
            columns,
            win_threshold,
            players,
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml_str(&content)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        info!(
            rows = config.rows,
            columns = config.columns,
            win_threshold = config.win_threshold,
            players = config.players.len(),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Checks dimensions and threshold.
    pub fn validate(&self) -> Result<(), ConfigError> {
        GameState::new(self.rows, self.columns, self.win_threshold).map(|_| ())
    }

    /// Builds the game state with all players registered and wraps it in a
    /// controller.
    #[instrument(skip(self))]
    pub fn build(&self) -> Result<Controller, ConfigError> {
        let mut state = GameState::new(self.rows, self.columns, self.win_threshold)?;
        for &symbol in &self.players {
            state.add_player(symbol);
        }
        Ok(Controller::new(state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config = GameConfig::from_toml_str("rows = 4").unwrap();
        assert_eq!(*config.rows(), 4);
        assert_eq!(*config.columns(), 3);
        assert_eq!(*config.win_threshold(), 3);
        assert_eq!(config.players(), &vec!['X', 'O']);
    }

    #[test]
    fn test_rejects_out_of_bounds_dimensions() {
        let err = GameConfig::from_toml_str("columns = 12").unwrap_err();
        assert!(err.message.contains("columns"));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = GameConfig::from_toml_str("rows = \"three\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_build_registers_players_in_order() {
        let config = GameConfig::new(4, 4, 4, vec!['X', 'O', 'A', 'B']);
        let controller = config.build().unwrap();
        let symbols: Vec<char> = controller.state().players().iter().map(|p| p.symbol()).collect();
        assert_eq!(symbols, vec!['X', 'O', 'A', 'B']);
        assert_eq!(controller.state().win_threshold(), 4);
    }
}
