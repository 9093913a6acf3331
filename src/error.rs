//! Error types for the audit CLI.
//!
//! This module provides structured error handling with:
//! - `AppError`: Domain-specific errors for application operations
//! - `Result<T>`: Type alias for Results using AppError
//!
//! Per-page fetch failures are deliberately NOT errors: they come back as
//! `FetchOutcome` data so one unreachable page never aborts a crawl.

use thiserror::Error;

/// Domain-specific errors for application operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid or malformed URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Out-of-range crawl argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Network client could not be constructed
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Report file could not be written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Report could not be serialized
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Create an invalid-URL error
    pub fn invalid_url(msg: impl Into<String>) -> Self {
        Self::InvalidUrl(msg.into())
    }

    /// Create an invalid-argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::NetworkError(msg.into())
    }
}

/// Result type alias using AppError.
pub type Result<T> = std::result::Result<T, AppError>;
