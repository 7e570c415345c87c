//! JSON-array file persistence for fskit.
//!
//! Many small tools need a trivially persisted list (logs, histories,
//! caches of metadata) without a database. This crate stores such lists as
//! JSON files whose root value is always an array, with append-or-overwrite
//! write semantics and strict reads.

pub mod array;
pub mod error;

pub use array::{exists, read, write, Payload, WriteMode};
pub use error::{StoreError, StoreResult};
