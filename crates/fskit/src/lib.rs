//! Small-file utilities.
//!
//! `fskit` bundles the workspace crates behind one import:
//! - [`store`]: JSON-array file persistence with append/overwrite semantics
//! - [`files`]: save/download/read helpers, inline-data envelopes, and
//!   directory watching
//! - [`session`]: interactive line input and environment parsing
//! - [`util`]: terminal palette, time formatting, MIME resolution, buffer
//!   digests, and the console logger

pub use fskit_files as files;
pub use fskit_session as session;
pub use fskit_store as store;
pub use fskit_util as util;

pub use fskit_util::{LogRecord, Logger, LoggerConfig, Zone};
