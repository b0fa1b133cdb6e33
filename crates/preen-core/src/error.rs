//! Error types for preen-core

use thiserror::Error;

/// Core error type for Preen
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Migrations directory cannot be listed
    #[error("[E001] Cannot read migrations directory '{path}': {source}")]
    DirUnreadable {
        path: String,
        source: std::io::Error,
    },

    /// E002: File name does not match the migration grammar
    #[error("[E002] file '{name}' has an invalid migration file name")]
    InvalidFileName { name: String },

    /// E003: Two discovered scripts carry the same version
    #[error("[E003] duplicate migration version {version}: '{first}' and '{second}'")]
    DuplicateVersion {
        version: i64,
        first: String,
        second: String,
    },

    /// E004: Configuration file not found
    #[error("[E004] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// E005: Failed to parse configuration file
    #[error("[E005] Failed to parse config: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    /// E006: Invalid configuration value
    #[error("[E006] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// E007: IO error
    #[error("[E007] IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
