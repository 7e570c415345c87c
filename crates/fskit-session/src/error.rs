//! Session error types.

use rustyline::error::ReadlineError;
use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur in an interactive session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The input stream was closed (EOF) or the prompt was interrupted.
    #[error("input stream closed")]
    Closed,

    /// The line reader failed.
    #[error("readline failed: {0}")]
    Readline(#[from] ReadlineError),

    /// A dotenv file could not be loaded.
    #[error("failed to load environment file: {0}")]
    Env(#[from] dotenvy::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_error_closed_displays() {
        assert_eq!(SessionError::Closed.to_string(), "input stream closed");
    }

    #[test]
    fn session_error_wraps_readline() {
        let err = SessionError::from(ReadlineError::Interrupted);
        assert!(err.to_string().contains("readline failed"));
    }
}
