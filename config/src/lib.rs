//! Configuration loading for Prime or not a Prime.
//!
//! The config file is optional. Its location is `$PRIMEGAME_CONFIG` when set,
//! otherwise `~/.primegame/config.toml`:
//!
//! ```toml
//! [game]
//! range_max = 10
//! range_factor = 10
//!
//! [app]
//! show_factors = true
//! ```
//!
//! Game values are validated while deserializing, so a loaded config always
//! carries usable [`GameSettings`].

use serde::Deserialize;
use std::{
    env, fs, io, iter,
    path::{Path, PathBuf},
};

use thiserror::Error;

use primegame_types::GameSettings;

pub const CONFIG_ENV_VAR: &str = "PRIMEGAME_CONFIG";

// Default value function for serde (bool::default() is false, so only true needs a fn)
const fn default_true() -> bool {
    true
}

#[derive(Debug, Default, Deserialize)]
pub struct PrimeGameConfig {
    pub game: Option<GameSettings>,
    pub app: Option<AppConfig>,
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Name a factor after a wrong guess on a composite number.
    #[serde(default = "default_true")]
    pub show_factors: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { show_factors: true }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("invalid config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl PrimeGameConfig {
    /// Load from the default location. A missing file is `Ok(None)`.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file");
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    /// Starting range and growth factor, falling back to the classic 10 / x10.
    #[must_use]
    pub fn game_settings(&self) -> GameSettings {
        self.game.unwrap_or_default()
    }

    #[must_use]
    pub fn show_factors(&self) -> bool {
        self.app.as_ref().is_none_or(|app| app.show_factors)
    }
}

/// `~/.primegame`, home of the config file and logs.
#[must_use]
pub fn data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".primegame"))
}

/// Log file locations in order of preference: `~/.primegame/logs/primegame.log`,
/// then the same layout under the working directory.
#[must_use]
pub fn log_file_candidates() -> Vec<PathBuf> {
    let relative = Path::new("logs").join("primegame.log");
    data_dir()
        .into_iter()
        .chain(iter::once(PathBuf::from(".primegame")))
        .map(|dir| dir.join(&relative))
        .collect()
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    if let Some(raw) = env::var_os(CONFIG_ENV_VAR)
        && !raw.is_empty()
    {
        return Some(PathBuf::from(raw));
    }
    data_dir().map(|dir| dir.join("config.toml"))
}
