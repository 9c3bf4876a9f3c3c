//! Error types for Pitwall.
//!
//! Defines the main error enum used throughout the application.

use thiserror::Error;

/// Main error type for Pitwall operations.
#[derive(Error, Debug)]
pub enum PitwallError {
    /// A query name that does not exist in the catalog was requested.
    #[error("Unknown query: {0}")]
    UnknownQuery(String),

    /// Query execution errors (malformed SQL, missing tables, type errors, etc.)
    #[error("Query error: {0}")]
    Query(String),

    /// Errors opening the backing database file.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Configuration errors (invalid config file, bad CLI arguments, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal application errors (terminal setup failures, bugs, etc.)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PitwallError {
    /// Creates an unknown-query error for the given name.
    pub fn unknown_query(name: impl Into<String>) -> Self {
        Self::UnknownQuery(name.into())
    }

    /// Creates a query error with the given message.
    pub fn query(msg: impl Into<String>) -> Self {
        Self::Query(msg.into())
    }

    /// Creates a connection error with the given message.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates an internal error with the given message.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::UnknownQuery(_) => "Unknown Query",
            Self::Query(_) => "Query Error",
            Self::Connection(_) => "Connection Error",
            Self::Config(_) => "Configuration Error",
            Self::Internal(_) => "Internal Error",
        }
    }
}

/// Result type alias using PitwallError.
pub type Result<T> = std::result::Result<T, PitwallError>;
