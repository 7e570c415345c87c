//! Interactive line session and environment parsing for fskit.
//!
//! [`Session`] wraps a readline editor with history. It is an explicitly
//! constructed, explicitly owned resource: the underlying input stream and
//! the history file are released when the session is dropped. One session
//! per process is the convention; nothing shares state globally.

pub mod env;
pub mod error;

use std::path::PathBuf;
use std::time::Duration;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

pub use env::{load_prefixed, load_prefixed_with_dotenv};
pub use error::{SessionError, SessionResult};

/// An interactive line-reading session with persistent history.
pub struct Session {
    editor: DefaultEditor,
    history_path: Option<PathBuf>,
}

impl Session {
    /// Open a session with history under the user's home directory
    /// (`~/.fskit/history`), when one exists.
    pub fn new() -> SessionResult<Self> {
        let history_path = dirs::home_dir().map(|home| home.join(".fskit").join("history"));
        Self::open(history_path)
    }

    /// Open a session with an explicit history file, or none.
    pub fn with_history(history_path: Option<PathBuf>) -> SessionResult<Self> {
        Self::open(history_path)
    }

    fn open(history_path: Option<PathBuf>) -> SessionResult<Self> {
        let mut editor = DefaultEditor::new()?;
        if let Some(path) = &history_path {
            if path.exists() {
                let _ = editor.load_history(path);
            }
        }
        Ok(Self {
            editor,
            history_path,
        })
    }

    /// Prompt for one line of input.
    ///
    /// EOF and interrupts surface as [`SessionError::Closed`].
    pub fn ask(&mut self, prompt: &str) -> SessionResult<String> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                let _ = self.editor.add_history_entry(line.as_str());
                Ok(line)
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Err(SessionError::Closed),
            Err(e) => Err(e.into()),
        }
    }

    /// Prompt for one line, substituting a default for an empty answer.
    pub fn ask_default(&mut self, prompt: &str, default: &str) -> SessionResult<String> {
        let answer = self.ask(prompt)?;
        if answer.trim().is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer)
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Some(path) = &self.history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            if let Err(e) = self.editor.save_history(path) {
                debug!(error = %e, "Could not save session history");
            }
        }
    }
}

/// Suspend the calling task for the given number of milliseconds.
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

/// Terminate the process with the given exit code.
pub fn exit(code: i32) -> ! {
    std::process::exit(code)
}
