//! Configuration file for parlor.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Top-level configuration, one table per concern.
///
/// Every field has a default, so an empty or partial file is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct ParlorConfig {
    /// Rock-paper-scissors-spock-lizard settings.
    rps: RpsSettings,
    /// Tic-tac-toe settings.
    tictactoe: TicTacToeSettings,
    /// Terminal behaviour.
    console: ConsoleSettings,
}

/// Settings for rock-paper-scissors-spock-lizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
#[serde(default)]
pub struct RpsSettings {
    /// Points needed to win a game.
    target_score: u32,
}

impl Default for RpsSettings {
    fn default() -> Self {
        Self::new(parlor_rps::DEFAULT_TARGET)
    }
}

/// Settings for tic-tac-toe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
#[serde(default)]
pub struct TicTacToeSettings {
    /// Points needed to win a game.
    target_score: u32,
}

impl Default for TicTacToeSettings {
    fn default() -> Self {
        Self::new(parlor_tictactoe::DEFAULT_TARGET)
    }
}

/// Terminal behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
#[serde(default)]
pub struct ConsoleSettings {
    /// Clear the screen between stages.
    clear_screen: bool,
    /// Wait for enter before each new round.
    pause_between_rounds: bool,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self::new(true, true)
    }
}

impl ParlorConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` when it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the rock-paper-scissors-spock-lizard target.
    #[must_use]
    pub fn with_rps_target(self, target_score: u32) -> Self {
        Self {
            rps: RpsSettings::new(target_score),
            ..self
        }
    }

    /// Replaces the tic-tac-toe target.
    #[must_use]
    pub fn with_tictactoe_target(self, target_score: u32) -> Self {
        Self {
            tictactoe: TicTacToeSettings::new(target_score),
            ..self
        }
    }

    /// Turns screen clearing off.
    #[must_use]
    pub fn without_clearing(self) -> Self {
        Self {
            console: ConsoleSettings::new(false, self.console.pause_between_rounds),
            ..self
        }
    }

    /// Checks values serde cannot.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rps.target_score == 0 {
            return Err(ConfigError::new(
                "rps.target_score must be at least 1".to_string(),
            ));
        }
        if self.tictactoe.target_score == 0 {
            return Err(ConfigError::new(
                "tictactoe.target_score must be at least 1".to_string(),
            ));
        }
        Ok(())
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = ParlorConfig::default();
        assert_eq!(*config.rps().target_score(), 10);
        assert_eq!(*config.tictactoe().target_score(), 3);
        assert!(*config.console().clear_screen());
        assert!(*config.console().pause_between_rounds());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ParlorConfig::load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, ParlorConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let file = write_config("[tictactoe]\ntarget_score = 5\n");
        let config = ParlorConfig::load(file.path()).unwrap();
        assert_eq!(*config.tictactoe().target_score(), 5);
        assert_eq!(*config.rps().target_score(), 10);
    }

    #[test]
    fn test_full_file() {
        let file = write_config(concat!(
            "[rps]\ntarget_score = 4\n\n",
            "[console]\nclear_screen = false\npause_between_rounds = false\n",
        ));
        let config = ParlorConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.rps().target_score(), 4);
        assert_eq!(*config.console(), ConsoleSettings::new(false, false));
    }

    #[test]
    fn test_zero_target_rejected() {
        let file = write_config("[rps]\ntarget_score = 0\n");
        let err = ParlorConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("rps.target_score"));
    }

    #[test]
    fn test_malformed_file_rejected() {
        let file = write_config("[rps\n");
        let err = ParlorConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_overrides() {
        let config = ParlorConfig::default()
            .with_rps_target(2)
            .with_tictactoe_target(7)
            .without_clearing();
        assert_eq!(*config.rps().target_score(), 2);
        assert_eq!(*config.tictactoe().target_score(), 7);
        assert!(!*config.console().clear_screen());
        assert!(*config.console().pause_between_rounds());
    }
}
