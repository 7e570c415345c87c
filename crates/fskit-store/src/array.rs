//! JSON-array file persistence.
//!
//! A store file's root JSON value is always an array of caller-supplied
//! records. Writes either replace the file or append to the existing array;
//! reads are strict about the root-array invariant. A file whose root is not
//! an array is rejected on both paths — prior contents are never silently
//! discarded.
//!
//! There is no locking and no atomic rename: concurrent appenders to the
//! same file race, and a crash mid-write can leave a truncated file. Callers
//! needing either guarantee must layer it on top.

use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tokio::fs;
use tracing::debug;

use crate::{StoreError, StoreResult};

/// Whether a write replaces the file or appends to the existing array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    Append,
    Overwrite,
}

/// One record or an ordered batch of records.
///
/// Normalization wraps a single record into a one-element array and uses a
/// batch as-is, preserving order.
#[derive(Debug, Clone)]
pub enum Payload<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> From<Vec<T>> for Payload<T> {
    fn from(items: Vec<T>) -> Self {
        Payload::Many(items)
    }
}

impl<T: Serialize> Payload<T> {
    fn into_values(self, path: &Path) -> StoreResult<Vec<Value>> {
        let items = match self {
            Payload::One(item) => vec![item],
            Payload::Many(items) => items,
        };
        items
            .into_iter()
            .map(|item| serde_json::to_value(item).map_err(|e| StoreError::write_failed(path, e)))
            .collect()
    }
}

/// Persist records into the JSON-array file at `path`.
///
/// The parent directory is created if absent. In [`WriteMode::Append`], the
/// existing file (if any) is read and its array extended with the new
/// records, existing entries first. The final array is written back
/// pretty-printed.
///
/// Fails with [`StoreError::Malformed`] when appending onto a file whose
/// root is not an array, and with [`StoreError::WriteFailed`] for any
/// filesystem or serialization fault.
pub async fn write<T: Serialize>(
    path: impl AsRef<Path>,
    payload: impl Into<Payload<T>>,
    mode: WriteMode,
) -> StoreResult<()> {
    let path = path.as_ref();
    debug!(path = %path.display(), ?mode, "Writing JSON array store");

    let mut entries = if mode == WriteMode::Append && path.exists() {
        let text = fs::read_to_string(path)
            .await
            .map_err(|e| StoreError::write_failed(path, e))?;
        let root: Value =
            serde_json::from_str(&text).map_err(|e| StoreError::write_failed(path, e))?;
        match root {
            Value::Array(existing) => existing,
            _ => return Err(StoreError::malformed(path)),
        }
    } else {
        Vec::new()
    };

    entries.extend(payload.into().into_values(path)?);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| StoreError::write_failed(path, e))?;
    }

    let content = serde_json::to_string_pretty(&Value::Array(entries))
        .map_err(|e| StoreError::write_failed(path, e))?;
    fs::write(path, content)
        .await
        .map_err(|e| StoreError::write_failed(path, e))?;

    Ok(())
}

/// Read the JSON-array file at `path`.
///
/// Fails with [`StoreError::NotFound`] when the file is absent and with
/// [`StoreError::Malformed`] when the parsed root is not an array. Element
/// typing is the caller's contract; a mismatch surfaces as
/// [`StoreError::ReadFailed`].
pub async fn read<T: DeserializeOwned>(path: impl AsRef<Path>) -> StoreResult<Vec<T>> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Reading JSON array store");

    let text = match fs::read_to_string(path).await {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(StoreError::not_found(path));
        }
        Err(e) => return Err(StoreError::read_failed(path, e)),
    };

    let root: Value = serde_json::from_str(&text).map_err(|e| StoreError::read_failed(path, e))?;
    if !root.is_array() {
        return Err(StoreError::malformed(path));
    }
    serde_json::from_value(root).map_err(|e| StoreError::read_failed(path, e))
}

/// Whether a store file exists at `path`.
pub fn exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;
    use tempfile::tempdir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Entry {
        a: i32,
    }

    #[tokio::test]
    async fn test_overwrite_then_append_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("items.json");

        write(&path, vec![Entry { a: 1 }], WriteMode::Overwrite)
            .await
            .unwrap();
        write(&path, vec![Entry { a: 2 }], WriteMode::Append)
            .await
            .unwrap();

        let entries: Vec<Entry> = read(&path).await.unwrap();
        assert_eq!(entries, vec![Entry { a: 1 }, Entry { a: 2 }]);
    }

    #[tokio::test]
    async fn test_single_record_is_wrapped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("one.json");

        write(&path, Payload::One(Entry { a: 7 }), WriteMode::Overwrite)
            .await
            .unwrap();

        let entries: Vec<Entry> = read(&path).await.unwrap();
        assert_eq!(entries, vec![Entry { a: 7 }]);
    }

    #[tokio::test]
    async fn test_append_to_missing_file_creates_it() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/dir/items.json");

        write(&path, vec![Entry { a: 1 }], WriteMode::Append)
            .await
            .unwrap();

        assert!(path.exists());
        let entries: Vec<Entry> = read(&path).await.unwrap();
        assert_eq!(entries, vec![Entry { a: 1 }]);
    }

    #[tokio::test]
    async fn test_overwrite_replaces_contents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("items.json");

        write(&path, vec![Entry { a: 1 }, Entry { a: 2 }], WriteMode::Overwrite)
            .await
            .unwrap();
        write(&path, vec![Entry { a: 3 }], WriteMode::Overwrite)
            .await
            .unwrap();

        let entries: Vec<Entry> = read(&path).await.unwrap();
        assert_eq!(entries, vec![Entry { a: 3 }]);
    }

    #[tokio::test]
    async fn test_append_onto_non_array_root_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("object.json");
        std::fs::write(&path, r#"{"x": 1}"#).unwrap();

        let err = write(&path, vec![json!({"y": 2})], WriteMode::Append)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Malformed { .. }));

        // Prior contents are untouched on the failed append
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, r#"{"x": 1}"#);
    }

    #[tokio::test]
    async fn test_read_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let result: StoreResult<Vec<Entry>> = read(dir.path().join("absent.json")).await;
        assert!(matches!(result.unwrap_err(), StoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_read_non_array_root_is_malformed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("object.json");
        std::fs::write(&path, r#"{"x": 1}"#).unwrap();

        let result: StoreResult<Vec<Entry>> = read(&path).await;
        assert!(matches!(result.unwrap_err(), StoreError::Malformed { .. }));
    }

    #[tokio::test]
    async fn test_read_unparseable_file_is_read_failed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{{{{").unwrap();

        let result: StoreResult<Vec<Entry>> = read(&path).await;
        assert!(matches!(result.unwrap_err(), StoreError::ReadFailed { .. }));
    }

    #[tokio::test]
    async fn test_output_is_pretty_printed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("items.json");

        write(&path, vec![Entry { a: 1 }], WriteMode::Overwrite)
            .await
            .unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("[\n"));
        assert!(text.contains("\"a\": 1"));
    }

    #[tokio::test]
    async fn test_append_preserves_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("items.json");

        for i in 0..5 {
            write(&path, vec![Entry { a: i }], WriteMode::Append)
                .await
                .unwrap();
        }

        let entries: Vec<Entry> = read(&path).await.unwrap();
        let values: Vec<i32> = entries.iter().map(|e| e.a).collect();
        assert_eq!(values, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_exists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("items.json");
        assert!(!exists(&path));
        std::fs::write(&path, "[]").unwrap();
        assert!(exists(&path));
    }
}
