//! Store error types.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while reading or writing a JSON-array file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file does not exist.
    #[error("file not found: {path}")]
    NotFound { path: PathBuf },

    /// The file's root JSON value is not an array.
    #[error("malformed content in {path}: root JSON value is not an array")]
    Malformed { path: PathBuf },

    /// A filesystem or serialization failure while writing.
    #[error("store write failed for {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A filesystem or deserialization failure while reading.
    #[error("store read failed for {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl StoreError {
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    pub fn malformed(path: impl Into<PathBuf>) -> Self {
        Self::Malformed { path: path.into() }
    }

    pub(crate) fn write_failed<E>(path: &Path, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::WriteFailed {
            path: path.to_path_buf(),
            source: Box::new(source),
        }
    }

    pub(crate) fn read_failed<E>(path: &Path, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ReadFailed {
            path: path.to_path_buf(),
            source: Box::new(source),
        }
    }
}
