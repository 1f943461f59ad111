//! Application-level configuration loading, including the team size gate used at game creation.

use std::{env, fs, io::ErrorKind, path::PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

use crate::state::game::TeamSizeRange;

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "ESPORTS_REGISTRY_CONFIG_PATH";

#[derive(Debug, Clone, Default)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    team_sizes: TeamSizeRange,
}

impl AppConfig {
    /// Build a configuration with an explicit team size gate.
    pub fn new(team_sizes: TeamSizeRange) -> Self {
        Self { team_sizes }
    }

    /// Load the application configuration from disk, falling back to built-in defaults.
    pub fn load() -> Self {
        let path = resolve_config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match Self::from_json(&contents) {
                Ok(app_config) => {
                    info!(
                        path = %path.display(),
                        min_team_size = app_config.team_sizes.min,
                        max_team_size = app_config.team_sizes.max,
                        "loaded configuration"
                    );
                    app_config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    /// Parse a JSON document. Missing sections keep their default values.
    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        let raw = serde_json::from_str::<RawConfig>(contents)?;
        raw.try_into()
    }

    /// Inclusive bounds on the number of players per side of a game.
    pub fn team_sizes(&self) -> TeamSizeRange {
        self.team_sizes
    }
}

/// Reasons a configuration document is rejected.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The document is not valid JSON for the expected shape.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The size range is empty or allows zero-player sides.
    #[error("team size range {min}..={max} is empty or starts at zero")]
    InvalidTeamSizes {
        /// Configured lower bound.
        min: usize,
        /// Configured upper bound.
        max: usize,
    },
}

#[derive(Debug, Deserialize)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    #[serde(default)]
    team_size: Option<RawTeamSize>,
}

#[derive(Debug, Deserialize)]
/// JSON representation of the team size gate.
struct RawTeamSize {
    min: usize,
    max: usize,
}

impl TryFrom<RawConfig> for AppConfig {
    type Error = ConfigError;

    fn try_from(value: RawConfig) -> Result<Self, Self::Error> {
        let Some(RawTeamSize { min, max }) = value.team_size else {
            return Ok(Self::default());
        };
        if min == 0 || min > max {
            return Err(ConfigError::InvalidTeamSizes { min, max });
        }
        Ok(Self::new(TeamSizeRange { min, max }))
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}
