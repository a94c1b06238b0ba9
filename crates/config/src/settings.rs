//! Layered settings
//!
//! Defaults are filled in by serde, then overridden by the settings file and
//! finally by environment variables.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use loan_calc_core::TermUnit;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{DEFAULT_CONFIG_FILE, DEFAULT_LOG_LEVEL, ENV_PREFIX, ENV_SEPARATOR};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load settings: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Failed to render settings as TOML: {0}")]
    Render(#[from] toml::ser::Error),
}

/// Logging output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter directive, e.g. "warn" or "loan_calc_core=debug"
    pub level: String,
    /// Emit JSON lines instead of human-readable text
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json: false,
        }
    }
}

/// Unit selections used when a command omits them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormDefaults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term_unit: Option<TermUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repay_unit: Option<TermUnit>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub logging: LoggingSettings,
    pub defaults: FormDefaults,
}

impl Settings {
    /// Load settings from an optional file plus the environment.
    ///
    /// An explicit `path` must exist; the default `loan-calc.toml` is used
    /// only when present.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (file, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        let settings: Settings = Config::builder()
            .add_source(
                File::from(file.as_path())
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(Environment::with_prefix(ENV_PREFIX).separator(ENV_SEPARATOR))
            .build()?
            .try_deserialize()?;

        tracing::debug!(path = %file.display(), ?settings, "settings loaded");
        Ok(settings)
    }

    /// Render the effective settings as a TOML document
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
