//! Shared utilities for fskit.
//!
//! This crate provides the common building blocks used across the fskit
//! workspace:
//! - Error handling patterns
//! - ANSI terminal palette and parametric color builders
//! - Timezone-aware date formatting and parsing
//! - MIME type resolution by file extension
//! - SHA-256 digests and byte sizing for in-memory buffers
//! - A leveled console logger returning structured records
//! - Tracing setup for internal diagnostics

pub mod diag;
pub mod digest;
pub mod error;
pub mod log;
pub mod mime;
pub mod term;
pub mod time;

pub use error::{Error, ErrorKind, Result};
pub use log::{Level, LogMessage, LogRecord, LogValue, Logger, LoggerConfig};
pub use time::Zone;
