//! Save, download, read, and inline-envelope operations.
//!
//! Every operation buffers full file contents in memory; these helpers are
//! meant for the small files the metadata contract targets, not for
//! streaming workloads.

use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use fskit_util::{digest, mime};
use serde::Serialize;
use tokio::fs;
use tracing::debug;
use url::Url;

use crate::{FilesError, FilesResult};

/// Metadata describing a saved or downloaded file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMetadata {
    pub filename: String,
    /// Resolved absolute path of the written file.
    pub fileuri: String,
    /// Lowercase hex SHA-256 of the contents.
    pub filehash: String,
    /// Size in bytes.
    pub filesize: u64,
    pub mime_type: String,
    /// Base64 of the contents.
    pub inline_data: String,
}

/// A request to save raw bytes under a directory.
#[derive(Debug, Clone)]
pub struct SaveRequest<'a> {
    pub filedata: &'a [u8],
    pub filename: String,
    /// Destination directory; created if absent.
    pub filepath: PathBuf,
}

/// A request to download a remote file into a directory.
#[derive(Debug, Clone)]
pub struct DownloadRequest {
    pub fileuri: String,
    /// Destination directory; created if absent.
    pub save_to: PathBuf,
}

/// Base64 bytes plus their MIME type, for embedding in a request payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub data: String,
    pub mime_type: String,
}

/// The generative inline-data envelope: `{"inlineData": {"data", "mimeType"}}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlinePart {
    pub inline_data: InlineData,
}

/// Save a buffer to `filepath/filename`, computing its metadata.
///
/// The destination directory is created if needed. Empty buffers are
/// rejected as invalid input.
pub async fn save_file(req: SaveRequest<'_>) -> FilesResult<FileMetadata> {
    let filehash = digest::sha256_hex(req.filedata)?;
    let filesize = digest::byte_size(req.filedata)?;

    fs::create_dir_all(&req.filepath)
        .await
        .map_err(|e| FilesError::Save {
            path: req.filepath.clone(),
            source: e,
        })?;

    let dest = req.filepath.join(&req.filename);
    fs::write(&dest, req.filedata)
        .await
        .map_err(|e| FilesError::Save {
            path: dest.clone(),
            source: e,
        })?;

    let resolved = dest.canonicalize().unwrap_or_else(|_| dest.clone());
    debug!(path = %resolved.display(), bytes = filesize, "Saved file");

    Ok(FileMetadata {
        mime_type: mime::mime_type(&req.filename).to_string(),
        inline_data: BASE64.encode(req.filedata),
        filename: req.filename,
        fileuri: resolved.display().to_string(),
        filehash,
        filesize,
    })
}

/// Download a remote file and save it under `save_to`.
///
/// The destination file name is the basename of the URL path (or
/// `"download"` when the path has none). Non-success HTTP statuses fail
/// before anything is written.
pub async fn download_file(req: DownloadRequest) -> FilesResult<FileMetadata> {
    let url = Url::parse(&req.fileuri).map_err(|_| FilesError::InvalidUrl(req.fileuri.clone()))?;
    let filename = url
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|name| !name.is_empty())
        .unwrap_or("download")
        .to_string();

    let client = reqwest::Client::builder()
        .user_agent("fskit")
        .build()
        .map_err(|e| FilesError::Download {
            url: req.fileuri.clone(),
            source: e,
        })?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FilesError::Download {
            url: req.fileuri.clone(),
            source: e,
        })?;

    if !response.status().is_success() {
        return Err(FilesError::DownloadStatus {
            url: req.fileuri,
            status: response.status().as_u16(),
        });
    }

    let bytes = response.bytes().await.map_err(|e| FilesError::Download {
        url: req.fileuri.clone(),
        source: e,
    })?;

    debug!(url = %req.fileuri, bytes = bytes.len(), "Downloaded file");

    save_file(SaveRequest {
        filedata: &bytes,
        filename,
        filepath: req.save_to,
    })
    .await
}

/// Read a file as UTF-8 text.
pub async fn read_text(path: impl AsRef<Path>) -> FilesResult<String> {
    let path = path.as_ref();
    match fs::read_to_string(path).await {
        Ok(text) => Ok(text),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(FilesError::NotFound {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(FilesError::Read {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Build the inline-data envelope for a file on disk.
pub async fn inline_part(path: impl AsRef<Path>) -> FilesResult<InlinePart> {
    let path = path.as_ref();
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(FilesError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Err(e) => {
            return Err(FilesError::Read {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    Ok(InlinePart {
        inline_data: InlineData {
            data: BASE64.encode(&bytes),
            mime_type: mime::mime_type(&filename).to_string(),
        },
    })
}

/// Whether a file exists at `path`.
///
/// Absence is `Ok(false)`; any other filesystem fault is reported as an
/// access failure.
pub fn exists(path: impl AsRef<Path>) -> FilesResult<bool> {
    let path = path.as_ref();
    match std::fs::metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(FilesError::Access {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;
    use wiremock::matchers::{method, path as url_path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_save_file_metadata() {
        let dir = tempdir().unwrap();
        let meta = save_file(SaveRequest {
            filedata: b"hello world",
            filename: "greeting.txt".to_string(),
            filepath: dir.path().to_path_buf(),
        })
        .await
        .unwrap();

        assert_eq!(meta.filename, "greeting.txt");
        assert_eq!(meta.filesize, 11);
        assert_eq!(meta.mime_type, "text/plain");
        assert_eq!(meta.filehash, fskit_util::digest::sha256_hex(b"hello world").unwrap());
        assert_eq!(meta.inline_data, "aGVsbG8gd29ybGQ=");

        let written = std::fs::read(dir.path().join("greeting.txt")).unwrap();
        assert_eq!(written, b"hello world");
    }

    #[tokio::test]
    async fn test_save_file_creates_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a/b/c");
        let meta = save_file(SaveRequest {
            filedata: b"x",
            filename: "file.bin".to_string(),
            filepath: nested.clone(),
        })
        .await
        .unwrap();

        assert!(nested.join("file.bin").exists());
        assert_eq!(meta.mime_type, "application/octet-stream");
    }

    #[tokio::test]
    async fn test_save_file_rejects_empty_buffer() {
        let dir = tempdir().unwrap();
        let err = save_file(SaveRequest {
            filedata: b"",
            filename: "empty.bin".to_string(),
            filepath: dir.path().to_path_buf(),
        })
        .await
        .unwrap_err();
        assert!(matches!(err, FilesError::Input(_)));
    }

    #[tokio::test]
    async fn test_download_file() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(url_path("/assets/data.bin"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"payload".to_vec()))
            .mount(&server)
            .await;

        let dir = tempdir().unwrap();
        let meta = download_file(DownloadRequest {
            fileuri: format!("{}/assets/data.bin", server.uri()),
            save_to: dir.path().to_path_buf(),
        })
        .await
        .unwrap();

        assert_eq!(meta.filename, "data.bin");
        assert_eq!(meta.filesize, 7);
        let written = std::fs::read(dir.path().join("data.bin")).unwrap();
        assert_eq!(written, b"payload");
    }

    #[tokio::test]
    async fn test_download_file_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(url_path("/gone"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let dir = tempdir().unwrap();
        let err = download_file(DownloadRequest {
            fileuri: format!("{}/gone", server.uri()),
            save_to: dir.path().to_path_buf(),
        })
        .await
        .unwrap_err();

        assert!(matches!(err, FilesError::DownloadStatus { status: 404, .. }));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_download_file_invalid_url() {
        let err = download_file(DownloadRequest {
            fileuri: "not a url".to_string(),
            save_to: PathBuf::from("/tmp"),
        })
        .await
        .unwrap_err();
        assert!(matches!(err, FilesError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn test_read_text() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("note.txt");
        std::fs::write(&path, "contents").unwrap();
        assert_eq!(read_text(&path).await.unwrap(), "contents");
    }

    #[tokio::test]
    async fn test_read_text_missing_file() {
        let dir = tempdir().unwrap();
        let err = read_text(dir.path().join("absent.txt")).await.unwrap_err();
        assert!(matches!(err, FilesError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_inline_part_envelope() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pixel.png");
        std::fs::write(&path, b"fake-png").unwrap();

        let part = inline_part(&path).await.unwrap();
        assert_eq!(part.inline_data.mime_type, "image/png");
        assert_eq!(part.inline_data.data, BASE64.encode(b"fake-png"));

        let value = serde_json::to_value(&part).unwrap();
        assert_eq!(value["inlineData"]["mimeType"], json!("image/png"));
        assert!(value["inlineData"]["data"].is_string());
    }

    #[tokio::test]
    async fn test_metadata_serializes_camel_case() {
        let dir = tempdir().unwrap();
        let meta = save_file(SaveRequest {
            filedata: b"abc",
            filename: "a.json".to_string(),
            filepath: dir.path().to_path_buf(),
        })
        .await
        .unwrap();

        let value = serde_json::to_value(&meta).unwrap();
        assert!(value.get("mimeType").is_some());
        assert!(value.get("inlineData").is_some());
        assert_eq!(value["mimeType"], json!("application/json"));
    }

    #[test]
    fn test_exists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("probe.txt");
        assert!(!exists(&path).unwrap());
        std::fs::write(&path, "x").unwrap();
        assert!(exists(&path).unwrap());
    }
}
