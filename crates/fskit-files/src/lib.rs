//! File operations facade for fskit.
//!
//! This crate bundles the buffered file helpers: saving raw bytes with
//! hash/size/MIME metadata, downloading remote files, reading text,
//! building base64 inline-data envelopes, and subscribing to directory
//! change events.

pub mod error;
pub mod ops;
pub mod watch;

pub use error::{FilesError, FilesResult};
pub use ops::{
    download_file, exists, inline_part, read_text, save_file, DownloadRequest, FileMetadata,
    InlineData, InlinePart, SaveRequest,
};
pub use watch::{watch, WatchConfig, WatchEvent, WatchHandle, WatchNotification};
