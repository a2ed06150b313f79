//! Game configuration loaded from TOML and overridden by CLI flags.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_engine::{Mode, Player, SessionSettings};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "noughts.toml";

/// Configuration for an interactive game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlayConfig {
    /// Human vs human, or human vs computer.
    #[serde(default)]
    mode: Mode,

    /// Mark that moves first.
    #[serde(default = "default_starting")]
    starting: Player,

    /// Mark played by the computer.
    #[serde(default = "default_computer")]
    computer: Player,

    /// Pause before the computer answers, in milliseconds.
    #[serde(default = "default_think_ms")]
    think_ms: u64,
}

fn default_starting() -> Player {
    Player::X
}

fn default_computer() -> Player {
    Player::O
}

fn default_think_ms() -> u64 {
    400
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            starting: default_starting(),
            computer: default_computer(),
            think_ms: default_think_ms(),
        }
    }
}

impl PlayConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mode = %config.mode, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, else [`DEFAULT_CONFIG_FILE`] if present,
    /// else the defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(DEFAULT_CONFIG_FILE)
            }
            None => Ok(Self::default()),
        }
    }

    /// Replaces each field for which an override is given.
    pub fn with_overrides(
        mut self,
        mode: Option<Mode>,
        starting: Option<Player>,
        computer: Option<Player>,
        think_ms: Option<u64>,
    ) -> Self {
        if let Some(mode) = mode {
            self.mode = mode;
        }
        if let Some(starting) = starting {
            self.starting = starting;
        }
        if let Some(computer) = computer {
            self.computer = computer;
        }
        if let Some(think_ms) = think_ms {
            self.think_ms = think_ms;
        }
        self
    }

    /// Session settings described by this configuration.
    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings::new(self.mode, self.starting, self.computer)
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
