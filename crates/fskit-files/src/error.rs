//! File operation error types.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for file operations.
pub type FilesResult<T> = Result<T, FilesError>;

/// Errors that can occur during file operations.
#[derive(Debug, Error)]
pub enum FilesError {
    /// Buffer validation failures (empty data, bad hash input).
    #[error(transparent)]
    Input(#[from] fskit_util::Error),

    /// The file does not exist.
    #[error("file not found: {path}")]
    NotFound { path: PathBuf },

    /// Existence check failed for reasons other than absence.
    #[error("failed to check {path}: {source}")]
    Access {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the file or its directory failed.
    #[error("failed to save {path}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading the file failed.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The download URL could not be parsed.
    #[error("invalid download url: {0}")]
    InvalidUrl(String),

    /// The HTTP transfer failed.
    #[error("download failed for {url}: {source}")]
    Download {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("download failed for {url}: HTTP status {status}")]
    DownloadStatus { url: String, status: u16 },

    /// The watch subscription could not be established.
    #[error("watch failed for {path}: {source}")]
    Watch {
        path: PathBuf,
        #[source]
        source: notify::Error,
    },
}
