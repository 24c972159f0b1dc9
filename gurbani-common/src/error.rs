//! Common error types for the gurbani service

use thiserror::Error;

/// Common result type for gurbani operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the gurbani crates
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested line or shabad not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// A fetched record is missing a required related entity
    #[error("Data integrity error: {0}")]
    DataIntegrity(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
