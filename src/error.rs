//! Error types for sqlassist
//!
//! The analysis engine itself is total and never returns an error. These types
//! cover the fallible edges around it: loading table catalogs and settings.
//! Each edge has its own error enum; the CLI wraps both with `anyhow` context.

use std::io;

/// Table catalog loading errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Failed to read the catalog file
    #[error("Failed to read catalog: {0}")]
    Io(#[from] io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse TOML catalog: {0}")]
    Toml(#[from] toml::de::Error),

    /// Failed to parse JSON
    #[error("Failed to parse JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    /// Unrecognized file extension
    #[error("Unsupported catalog format: {0} (expected .toml or .json)")]
    UnsupportedFormat(String),

    /// Two tables share a name (case-insensitive)
    #[error("Duplicate table '{0}' in catalog")]
    DuplicateTable(String),

    /// Table with an empty name
    #[error("Catalog contains a table with an empty name")]
    EmptyTableName,
}

/// Configuration loading/parsing errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Home directory not found
    #[error("Could not determine home directory")]
    NoHomeDir,

    /// Failed to read the config file
    #[error("Failed to read configuration: {0}")]
    Io(#[from] io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Specialized Result type for catalog operations
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

/// Specialized Result type for config operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
