// Engine configuration, loaded from a RON file

use crate::command::history::{DEFAULT_MAX_HISTORY, MAX_HISTORY_CAPACITY};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory name used under the platform config directory
const APP_DIR: &str = "undo-accumulator";

/// File name looked up inside `APP_DIR`
const CONFIG_FILE: &str = "config.ron";

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("RON error: {0}")]
    Ron(#[from] ron::error::SpannedError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Settings for a session
///
/// Example file:
/// ```text
/// (
///     history_capacity: 50,
///     initial_value: 0,
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum number of operations kept for undo
    pub history_capacity: usize,
    /// Starting value, also restored when the last entry is undone
    pub initial_value: i64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_MAX_HISTORY,
            initial_value: 0,
        }
    }
}

impl EngineConfig {
    /// Parse a configuration from RON text
    pub fn from_ron(text: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_ron(&text)
    }

    /// Resolve the configuration for the driver
    ///
    /// An explicit path must exist. Without one, the platform config file is
    /// used if present, otherwise the defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match default_config_path() {
            Some(path) if path.is_file() => {
                log::debug!("Loading configuration from {}", path.display());
                Self::load(path)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn to_ron(&self) -> Result<String, ConfigError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.history_capacity == 0 {
            return Err(ConfigError::Invalid(
                "history_capacity must be at least 1".to_string(),
            ));
        }
        if self.history_capacity > MAX_HISTORY_CAPACITY {
            return Err(ConfigError::Invalid(format!(
                "history_capacity must be at most {}",
                MAX_HISTORY_CAPACITY
            )));
        }
        Ok(())
    }
}

/// Platform location of the config file, e.g. `~/.config/undo-accumulator/config.ron`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}
