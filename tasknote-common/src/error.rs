//! Common error types for TaskNote services

use thiserror::Error;

/// Common result type for TaskNote plumbing
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the shared service plumbing
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
