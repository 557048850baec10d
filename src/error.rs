//! Error types for the Bookshelf server
//!
//! Query-shape errors never surface here: the GraphQL executor recovers them
//! and reports them in the response's `errors` array. The variants below are
//! startup failures, which are fatal and terminate the process non-zero.

use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid listen address: {0}")]
    Address(#[from] std::net::AddrParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
