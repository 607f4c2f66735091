//! Game configuration loaded from TOML.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strictly_connect_four::Player;
use tracing::{debug, info, instrument};

/// User-configurable settings for the terminal game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Display name for player one.
    #[serde(default = "default_player_one_name")]
    player_one_name: String,

    /// Display name for player two.
    #[serde(default = "default_player_two_name")]
    player_two_name: String,

    /// File receiving tracing output (the terminal belongs to the UI).
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Show the current player's piece above the cursor column.
    #[serde(default = "default_show_preview")]
    show_preview: bool,
}

fn default_player_one_name() -> String {
    Player::One.to_string()
}

fn default_player_two_name() -> String {
    Player::Two.to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("connect_four.log")
}

fn default_show_preview() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_one_name: default_player_one_name(),
            player_two_name: default_player_two_name(),
            log_file: default_log_file(),
            show_preview: default_show_preview(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            player_one = %config.player_one_name,
            player_two = %config.player_two_name,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of the file values.
    #[instrument(skip_all)]
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(name) = &cli.player_one {
            self.player_one_name = name.clone();
        }
        if let Some(name) = &cli.player_two {
            self.player_two_name = name.clone();
        }
        if let Some(path) = &cli.log_file {
            self.log_file = path.clone();
        }
        if cli.no_preview {
            self.show_preview = false;
        }
        self
    }

    /// Display name for `player`.
    pub fn name_of(&self, player: Player) -> &str {
        match player {
            Player::One => &self.player_one_name,
            Player::Two => &self.player_two_name,
        }
    }
}

/// Configuration error.
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
