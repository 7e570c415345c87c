//! Cross-crate round trips through the facade.

use anyhow::Result;
use fskit::store::{self, WriteMode};
use fskit::util::digest;
use fskit::Logger;
use serde_json::{json, Value};
use tempfile::tempdir;

#[tokio::test]
async fn store_overwrite_then_append_round_trip() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("events.json");

    store::write(&path, vec![json!({"a": 1})], WriteMode::Overwrite).await?;
    store::write(&path, vec![json!({"a": 2})], WriteMode::Append).await?;

    let entries: Vec<Value> = store::read(&path).await?;
    assert_eq!(entries, vec![json!({"a": 1}), json!({"a": 2})]);
    Ok(())
}

#[tokio::test]
async fn saved_metadata_agrees_with_digest_contract() -> Result<()> {
    let dir = tempdir()?;
    let data = b"the quick brown fox";

    let meta = fskit::files::save_file(fskit::files::SaveRequest {
        filedata: data,
        filename: "fox.txt".to_string(),
        filepath: dir.path().to_path_buf(),
    })
    .await?;

    assert_eq!(meta.filehash, digest::sha256_hex(data)?);
    assert_eq!(meta.filesize, digest::byte_size(data)?);
    assert_eq!(meta.mime_type, fskit::util::mime::mime_type("fox.txt"));

    let text = fskit::files::read_text(dir.path().join("fox.txt")).await?;
    assert_eq!(text.as_bytes(), &data[..]);
    Ok(())
}

#[tokio::test]
async fn log_records_persist_through_the_store() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("audit.json");

    let logger = Logger::named("roundtrip");
    let first = logger.info("first");
    let second = logger.success(("second", "batch"));

    store::write(
        &path,
        vec![serde_json::to_value(&first)?, serde_json::to_value(&second)?],
        WriteMode::Append,
    )
    .await?;

    let entries: Vec<Value> = store::read(&path).await?;
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["level"], json!("INFO"));
    assert_eq!(entries[0]["callerTag"], json!("fn: roundtrip"));
    assert_eq!(entries[0]["message"], json!("first"));
    assert_eq!(entries[1]["level"], json!("SUCCESS"));
    assert_eq!(entries[1]["message"], json!(["second", "batch"]));
    Ok(())
}
