//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;
use yieldline_bonds::BondError;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Valuation failed.
    #[error(transparent)]
    Bond(#[from] BondError),

    /// Configuration file named explicitly but absent.
    #[error("Configuration file not found: {}", .0.display())]
    MissingConfig(PathBuf),

    /// Invalid configuration value.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed TOML.
    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// Settings could not be written as TOML.
    #[error("Serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// JSON output failed.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Creates a configuration error.
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config(reason.into())
    }
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
