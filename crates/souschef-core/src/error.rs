//! Core error types for souschef-core.
//!
//! Engine transitions never fail: invalid transitions (advancing past the
//! finished state, cancelling an idle timer) are defined no-ops, and
//! notifier failures are logged and swallowed. The types here cover the
//! I/O edges only - configuration, recipe input, session persistence.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for souschef-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Recipe input errors
    #[error("Recipe error: {0}")]
    Recipe(#[from] RecipeError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
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

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Recipe input errors.
#[derive(Error, Debug)]
pub enum RecipeError {
    /// Failed to read the recipe file
    #[error("Failed to read recipe from {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the recipe JSON
    #[error("Failed to parse recipe: {0}")]
    ParseFailed(#[from] serde_json::Error),

    /// A recipe without instructions cannot drive a session
    #[error("Recipe '{title}' has no instructions")]
    NoInstructions { title: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
