//! Core error types for furthest-core.
//!
//! The quiz itself has almost no failure modes: malformed answers are scored,
//! not rejected. What remains is I/O on the terminal, the TOML config file and
//! validation of the startup parameters.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for furthest-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Key does not exist in the config tree
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Validation errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// The maximum number for question generation is outside the playable range
    #[error("Max number must be in [{min} - {max}], got {value}")]
    HighestNumberOutOfRange { value: i64, min: u32, max: u32 },

    /// Answer timeout must be at least one second
    #[error("Answer timeout must be at least 1 second, got {secs}")]
    InvalidTimeout { secs: u64 },

    /// A question contains the same value twice
    #[error("Question values must be pairwise distinct: {0:?}")]
    DuplicateValues([u32; 3]),

    /// Both extremes are equally far from the middle value
    #[error("Question has no unique furthest number: {0:?}")]
    AmbiguousGaps([u32; 3]),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
