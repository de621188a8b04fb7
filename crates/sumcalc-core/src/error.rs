//! Error types for sumcalc-core
//!
//! Two families live here: [`ValidationError`] is what the user sees in the
//! feedback region after a failed compute, [`CoreError`] covers everything
//! that can go wrong around the calculator (config files, themes, IO).

use serde::{Deserialize, Serialize};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Validation failures reported by a compute attempt.
///
/// Both kinds are recoverable by editing the operands and computing again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    /// One of the operands is empty or whitespace only.
    #[error("Please enter both numbers")]
    MissingInput,

    /// One of the operands has no numeric prefix.
    #[error("Please enter valid numbers")]
    InvalidNumber,
}

/// Errors raised outside the calculator itself.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Underlying IO error bubbled up from filesystem operations.
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// Config file exists but could not be read.
    #[error("failed to read config at {path:?}: {source}")]
    ConfigRead { path: PathBuf, source: io::Error },

    /// Config file could not be parsed.
    #[error("invalid config at {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Config could not be turned back into TOML.
    #[error("failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// No built-in theme has the requested name.
    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    /// A theme file was given but could not be loaded.
    #[error("invalid theme file at {path:?}: {reason}")]
    ThemeFile { path: PathBuf, reason: String },

    /// Platform has no config directory and no explicit path was given.
    #[error("no config directory available on this platform")]
    NoConfigDir,
}

/// Result type alias using [`CoreError`].
pub type CoreResult<T> = Result<T, CoreError>;
