//! Tournament settings loaded from TOML.
//!
//! ```toml
//! [search]
//! max_depth = 5
//! pruning_enabled = true
//! random_seed = 42
//!
//! [tournament]
//! games = 4
//! starting_player = 0
//!
//! [players.a]
//! name = "Alpha"
//! strength = 9.0
//!
//! [players.b]
//! name = "Beta"
//! strength = 8.0
//! ```
//!
//! Every table and key is optional; missing ones take their defaults.

use game_tree::{DomainError, PlayerStrength, SearchConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::runner::TournamentConfig;

/// File looked up in the working directory when no path is given.
pub const DEFAULT_SETTINGS_FILE: &str = "tournament.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid player: {0}")]
    Player(#[from] DomainError),
}

/// The two participants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Players {
    pub a: PlayerStrength,
    pub b: PlayerStrength,
}

impl Default for Players {
    fn default() -> Self {
        Self {
            a: PlayerStrength {
                name: "A".to_string(),
                strength: 9.0,
            },
            b: PlayerStrength {
                name: "B".to_string(),
                strength: 8.0,
            },
        }
    }
}

/// Everything needed to run a tournament.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentSettings {
    pub search: SearchConfig,
    pub tournament: TournamentConfig,
    pub players: Players,
}

impl TournamentSettings {
    /// Parses settings from a TOML string and checks the player strengths.
    pub fn from_toml(contents: &str, path: &Path) -> Result<Self, SettingsError> {
        let settings: Self = toml::from_str(contents).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        settings.players.a.score()?;
        settings.players.b.score()?;
        Ok(settings)
    }

    /// Load settings from a specific path.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let contents = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Loading settings from {}", path.display());
        Self::from_toml(&contents, path)
    }

    /// Loads `path` if given, else [`DEFAULT_SETTINGS_FILE`] if present, else defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, SettingsError> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let default_path = Path::new(DEFAULT_SETTINGS_FILE);
        if default_path.exists() {
            return Self::load(default_path);
        }

        debug!("No {} found, using built-in defaults", DEFAULT_SETTINGS_FILE);
        Ok(Self::default())
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod settings_tests;
