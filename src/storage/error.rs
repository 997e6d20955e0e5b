//! Local store error types
//!
//! Defines all errors that can occur while reading or writing persisted flags.

use thiserror::Error;

/// Errors that can occur in the local store
#[derive(Error, Debug)]
pub enum StorageError {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization of the store file failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A persisted value exists but cannot be interpreted
    #[error("Corrupt value for {key}: {reason}")]
    Corrupt { key: String, reason: String },
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization(err.to_string())
    }
}

/// Result type alias for local store operations
pub type StorageResult<T> = Result<T, StorageError>;
