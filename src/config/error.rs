//! Configuration error types

use thiserror::Error;

use crate::domain::valuation::TableError;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Multiplier tables could not be loaded: {0}")]
    TablesLoad(#[from] TableError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid socket address: {0}")]
    InvalidSocketAddr(String),

    #[error("Multiplier tables path is empty")]
    EmptyTablesPath,

    #[error("Multiplier tables file not found: {0}")]
    TablesFileNotFound(String),
}
