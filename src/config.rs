//! Process-level configuration.
//!
//! Sources, highest priority first:
//! 1. Environment variables (`TASKGATE_*`, `__` separates nested keys, for
//!    example `TASKGATE_AI__MODEL=mistral`)
//! 2. A TOML file (`--config <path>`, or `taskgate/config.toml` under the
//!    user's config directory when present)
//! 3. Built-in defaults
//!
//! The `automation` and `ai` sections become the static defaults the
//! settings resolver falls back to. User overrides saved through the
//! settings editor still take precedence over them at resolution time.

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::settings::domain::{AiDefaults, AutomationDefaults, IntegrationDefaults};

const ENV_PREFIX: &str = "TASKGATE_";
const APP_DIR: &str = "taskgate";
const CONFIG_FILE: &str = "config.toml";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A provider produced invalid or mistyped values.
    #[error("invalid configuration: {0}")]
    Figment(#[from] Box<figment::Error>),
    /// An explicitly requested configuration file does not exist.
    #[error("configuration file not found: {}", path.display())]
    MissingFile {
        /// The requested path.
        path: PathBuf,
    },
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

/// Resolved process configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding the task snapshot and settings overrides.
    pub data_dir: PathBuf,
    /// Automation webhook defaults.
    pub automation: AutomationDefaults,
    /// AI inference defaults.
    pub ai: AiDefaults,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR),
            automation: AutomationDefaults::default(),
            ai: AiDefaults::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from defaults, the user config file and the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a source holds invalid values.
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self::figment(None).extract()?)
    }

    /// Loads configuration using an explicit TOML file instead of the user
    /// config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingFile`] when `path` is not a file, or
    /// another [`ConfigError`] when a source holds invalid values.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::MissingFile {
                path: path.to_path_buf(),
            });
        }
        Ok(Self::figment(Some(path)).extract()?)
    }

    /// Builds the provider chain.
    ///
    /// Public so tests can layer additional providers on top.
    #[must_use]
    pub fn figment(config_file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        let file = config_file
            .map(Path::to_path_buf)
            .or_else(Self::user_config_path);
        if let Some(path) = file {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Static integration defaults derived from this configuration.
    #[must_use]
    pub fn integration_defaults(&self) -> IntegrationDefaults {
        IntegrationDefaults {
            automation: self.automation.clone(),
            ai: self.ai.clone(),
        }
    }

    fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }
}
