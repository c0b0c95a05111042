//! Error types for the campus activities library.
//!
//! Field validation failures are not errors in this sense: the form reports
//! them through [`crate::form::FieldErrors`]. `CampusError` covers storage,
//! configuration and caller mistakes.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for catalog, storage and form-wiring operations.
#[derive(Error, Debug)]
pub enum CampusError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Activity not found for the given ID
    #[error("Activity with ID {id} not found")]
    ActivityNotFound { id: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input that the caller has to fix before retrying
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> CampusError {
        CampusError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl CampusError {
    /// Creates a database error with a message and the underlying cause.
    pub fn database(message: impl Into<String>, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.into(),
            source,
        }
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Wraps a `spawn_blocking` join failure.
    pub(crate) fn join(error: tokio::task::JoinError) -> Self {
        Self::Configuration {
            message: format!("Task join error: {error}"),
        }
    }
}

impl From<validator::ValidationErrors> for CampusError {
    /// Storage-boundary check failures surface as invalid input on the record.
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::InvalidInput {
            field: "activity".to_string(),
            reason: errors.to_string(),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| CampusError::database(message, e))
    }
}

/// Result type alias for campus operations
pub type Result<T> = std::result::Result<T, CampusError>;
