//! Error types for brigade-dispatch

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The status store could not be read
    #[error("Status store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Truck not found: {0}")]
    TruckNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
