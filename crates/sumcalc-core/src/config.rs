//! User configuration
//!
//! Read from `<config dir>/sumcalc/config.toml` unless a path is given.
//! A missing file is not an error; every field has a default.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::theme::Theme;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Built-in theme name
    pub theme: String,
    /// Custom theme file; takes precedence over `theme`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_file: Option<PathBuf>,
    /// Start with the help overlay open
    pub show_help: bool,
    /// Event poll interval in milliseconds
    pub tick_rate_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default directive level for the sumcalc crates
    pub level: String,
    /// Log file used while the terminal UI is running
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            theme_file: None,
            show_help: false,
            tick_rate_ms: 100,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Loads the config from the default location.
    pub fn load() -> CoreResult<Self> {
        let path = Self::config_path().ok_or(CoreError::NoConfigDir)?;
        Self::load_from(&path)
    }

    /// Loads the config from `path`, falling back to defaults if it does not exist.
    pub fn load_from(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            tracing::debug!(?path, "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|source| CoreError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&contents).map_err(|source| CoreError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(?path, "loaded config");
        Ok(config)
    }

    pub fn to_toml(&self) -> CoreResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// `<config dir>/sumcalc/config.toml`, if the platform has a config dir.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("sumcalc").join("config.toml"))
    }

    /// Log file to use in UI mode: the configured one, else `<cache dir>/sumcalc/sumcalc.log`.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.logging
            .file
            .clone()
            .or_else(|| dirs::cache_dir().map(|dir| dir.join("sumcalc").join("sumcalc.log")))
    }

    /// Resolves the theme: a theme file wins over a built-in name.
    pub fn theme(&self) -> CoreResult<Theme> {
        match &self.ui.theme_file {
            Some(path) => Theme::from_file(path),
            None => Theme::by_name(&self.ui.theme),
        }
    }

    /// Applies command-line overrides.
    pub fn apply_overrides(&mut self, theme: Option<String>, log_file: Option<PathBuf>) {
        if let Some(theme) = theme {
            // An explicit name on the command line beats a configured file.
            self.ui.theme = theme;
            self.ui.theme_file = None;
        }
        if log_file.is_some() {
            self.logging.file = log_file;
        }
    }
}
