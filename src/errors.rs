//! Unified error types for customer-hub.
//!
//! Domain code returns [`Error`]; the HTTP layer decides the status code.

use thiserror::Error;

/// Errors raised by the services and the startup path
#[derive(Debug, Error)]
pub enum Error {
    /// A referenced record does not exist
    #[error("{entity} not found")]
    NotFound {
        /// Human-readable name of what was missing (e.g. `"Customer"`)
        entity: &'static str,
    },

    /// Input failed a shape or field check
    #[error("{message}")]
    Validation {
        /// Description of the failed check
        message: String,
    },

    /// A monetary amount outside the accepted range
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: i64,
    },

    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// Failure reported by the record store
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O failure (socket bind, config file)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for a [`Error::Validation`] with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
