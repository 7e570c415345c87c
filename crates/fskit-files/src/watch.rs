//! Directory watch subscriptions.
//!
//! A subscription selects a single event kind on a directory tree and
//! invokes a caller-supplied handler once per matching filesystem event,
//! sequentially. The underlying notify watcher runs on its own threads and
//! is bridged into a tokio channel; events may queue there if the handler
//! is slow.
//!
//! The subscription is an owned resource: dropping the returned
//! [`WatchHandle`] (or calling [`WatchHandle::stop`]) tears it down.
//! Internal watch-layer faults are unrecoverable: they are logged and end
//! the subscription.

use std::path::{Path, PathBuf};

use notify::event::{CreateKind, RemoveKind};
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher as _};
use tokio::sync::mpsc;
use tracing::{debug, error};

use crate::{FilesError, FilesResult};

/// Filesystem event kinds a subscription can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchEvent {
    /// A file appeared.
    Add,
    /// A directory appeared.
    AddDir,
    /// A file or directory changed.
    Change,
    /// A file disappeared.
    Unlink,
    /// A directory disappeared.
    UnlinkDir,
}

impl WatchEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            WatchEvent::Add => "add",
            WatchEvent::AddDir => "addDir",
            WatchEvent::Change => "change",
            WatchEvent::Unlink => "unlink",
            WatchEvent::UnlinkDir => "unlinkDir",
        }
    }

    /// Parse an event name as it appears in watch configurations.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "add" => Some(WatchEvent::Add),
            "addDir" => Some(WatchEvent::AddDir),
            "change" => Some(WatchEvent::Change),
            "unlink" => Some(WatchEvent::Unlink),
            "unlinkDir" => Some(WatchEvent::UnlinkDir),
            _ => None,
        }
    }
}

/// Configuration for a watch subscription.
#[derive(Debug, Clone)]
pub struct WatchConfig {
    /// Directory to watch, recursively.
    pub dir_path: PathBuf,
    /// The single event kind to deliver.
    pub event: WatchEvent,
}

/// One delivered filesystem event.
#[derive(Debug, Clone, PartialEq)]
pub struct WatchNotification {
    /// Resolved absolute path of the affected file or directory.
    pub file_path: PathBuf,
    pub event: WatchEvent,
}

/// An active watch subscription. Dropping it stops the watcher and the
/// delivery task.
pub struct WatchHandle {
    // Held to keep the notify threads alive for the handle's lifetime.
    _watcher: RecommendedWatcher,
    task: tokio::task::JoinHandle<()>,
}

impl std::fmt::Debug for WatchHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatchHandle").finish_non_exhaustive()
    }
}

impl WatchHandle {
    /// Stop the subscription.
    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for WatchHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Classify a notify event kind into the subscription vocabulary.
///
/// Creates and removals of unspecified kind fall back to a directory probe
/// on the path (which, for removals, no longer exists and reads as a file).
fn classify(kind: &EventKind, path: &Path) -> Option<WatchEvent> {
    match kind {
        EventKind::Create(CreateKind::File) => Some(WatchEvent::Add),
        EventKind::Create(CreateKind::Folder) => Some(WatchEvent::AddDir),
        EventKind::Create(_) => Some(if path.is_dir() {
            WatchEvent::AddDir
        } else {
            WatchEvent::Add
        }),
        EventKind::Modify(_) => Some(WatchEvent::Change),
        EventKind::Remove(RemoveKind::File) => Some(WatchEvent::Unlink),
        EventKind::Remove(RemoveKind::Folder) => Some(WatchEvent::UnlinkDir),
        EventKind::Remove(_) => Some(WatchEvent::Unlink),
        _ => None,
    }
}

/// Start watching a directory tree for one event kind.
///
/// The handler is invoked once per matching event, in delivery order, from
/// a tokio task. Must be called from within a tokio runtime.
pub fn watch<F>(config: WatchConfig, handler: F) -> FilesResult<WatchHandle>
where
    F: Fn(WatchNotification) + Send + 'static,
{
    let dir = config
        .dir_path
        .canonicalize()
        .map_err(|e| FilesError::Access {
            path: config.dir_path.clone(),
            source: e,
        })?;

    let wanted = config.event;
    let (tx, mut rx) = mpsc::channel::<Result<WatchNotification, notify::Error>>(100);

    let mut watcher = RecommendedWatcher::new(
        move |res: Result<Event, notify::Error>| match res {
            Ok(event) => {
                for path in event.paths {
                    match classify(&event.kind, &path) {
                        Some(kind) if kind == wanted => {
                            let _ = tx.blocking_send(Ok(WatchNotification {
                                file_path: path,
                                event: kind,
                            }));
                        }
                        _ => {}
                    }
                }
            }
            Err(e) => {
                let _ = tx.blocking_send(Err(e));
            }
        },
        Config::default(),
    )
    .map_err(|e| FilesError::Watch {
        path: dir.clone(),
        source: e,
    })?;

    watcher
        .watch(&dir, RecursiveMode::Recursive)
        .map_err(|e| FilesError::Watch {
            path: dir.clone(),
            source: e,
        })?;

    debug!(path = %dir.display(), event = wanted.as_str(), "Watch subscription started");

    let task = tokio::spawn(async move {
        while let Some(delivery) = rx.recv().await {
            match delivery {
                Ok(notification) => handler(notification),
                Err(e) => {
                    error!(error = %e, "Watch stream failed, stopping subscription");
                    break;
                }
            }
        }
    });

    Ok(WatchHandle {
        _watcher: watcher,
        task,
    })
}
