//! Error types for the rolodex crate.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while executing a REPL command.
///
/// Every variant is caught at the dispatch boundary and turned into a
/// reply string; nothing here ever crashes the REPL.
#[derive(Error, Debug)]
pub enum CommandError {
    /// A value failed domain validation (phone format, date format, name)
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The named contact does not exist in the book
    #[error("{name} is not in contacts")]
    ContactNotFound { name: String },

    /// Missing, extra, or otherwise unusable command arguments
    #[error("{0}")]
    InvalidArguments(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur while saving or loading the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Underlying file I/O failed
    #[error("Address book file error: {0}")]
    Io(#[from] std::io::Error),

    /// The file contents are not a valid address book
    #[error("Address book parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;
