//! Configuration file loading for the bot arena.
//!
//! Presets and defaults live in `arena.toml` in the working directory. A
//! missing file is not an error: every field has a default.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Plies after which an unfinished game is scored as a draw.
pub const DEFAULT_MAX_PLIES: u32 = 200;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// Requested preset was not found in the configuration.
    #[error("Preset not found: {0}")]
    PresetNotFound(String),
}

/// Reusable match settings.
///
/// Unset fields fall back to the command line or the arena defaults.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PresetConfig {
    /// Number of games to play in a match. Defaults to 10.
    #[serde(default = "default_games")]
    pub games: u32,
    /// Ply limit per game, overriding the arena-wide limit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_plies: Option<u32>,
    /// Base seed for the match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_games() -> u32 {
    10
}

/// Main arena configuration structure.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ArenaConfig {
    /// Ply limit per game.
    #[serde(default = "default_max_plies")]
    pub max_plies: u32,
    /// Map of preset names to their configurations.
    #[serde(default)]
    pub presets: HashMap<String, PresetConfig>,
}

fn default_max_plies() -> u32 {
    DEFAULT_MAX_PLIES
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            max_plies: DEFAULT_MAX_PLIES,
            presets: HashMap::new(),
        }
    }
}

impl ArenaConfig {
    /// Loads the arena configuration from [`Self::config_path()`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Self::config_path())
    }

    /// Loads the configuration at `path`, or the defaults if there is no file.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load()`].
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the path to the configuration file.
    pub fn config_path() -> PathBuf {
        PathBuf::from("arena.toml")
    }

    /// Retrieves a preset by name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::PresetNotFound`] if no preset has that name.
    pub fn get_preset(&self, name: &str) -> Result<&PresetConfig, ConfigError> {
        self.presets
            .get(name)
            .ok_or_else(|| ConfigError::PresetNotFound(name.to_string()))
    }
}
