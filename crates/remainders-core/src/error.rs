//! Core error types for remainders-core.
//!
//! Defines the error hierarchy using thiserror. Nothing in the core is
//! fatal: storage failures leave the in-memory state authoritative, import
//! failures leave the store untouched, and order drift is healed silently
//! by the reconciler rather than reported.

use thiserror::Error;

/// Core error type for remainders-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Persistence errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Backup import errors
    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Persistence-specific errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open the database
    #[error("Failed to open database at {path}: {source}")]
    OpenFailed {
        path: std::path::PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Database is locked
    #[error("Database is locked")]
    Locked,
}

/// Backup import errors. An import that fails leaves the store untouched.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The file is not parseable JSON, or its records don't match the schema
    #[error("Backup is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Parseable JSON, but neither a wrapper object nor a bare item array
    #[error("Unrecognized backup format: expected an object with an `events` array, or a bare item array")]
    UnrecognizedFormat,
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Operation referenced an id not present in the item set
    #[error("No item with id {id}")]
    UnknownItem { id: i64 },
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(err, _msg) => {
                if err.code == rusqlite::ErrorCode::DatabaseLocked {
                    StorageError::Locked
                } else {
                    StorageError::QueryFailed(err.to_string())
                }
            }
            _ => StorageError::QueryFailed(err.to_string()),
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
