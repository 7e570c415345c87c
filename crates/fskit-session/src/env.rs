//! Environment parsing.
//!
//! Returns the subset of the process environment whose keys start with a
//! given prefix, as two parallel vectors pairing by index. Entries are
//! sorted by key so the pairing is deterministic; process-environment
//! iteration order is not.

use std::path::Path;

use tracing::debug;

use crate::{SessionError, SessionResult};

/// Keys and values of every environment variable starting with `prefix`,
/// as two parallel vectors pairing by index.
pub fn load_prefixed(prefix: &str) -> (Vec<String>, Vec<String>) {
    let mut pairs: Vec<(String, String)> = std::env::vars()
        .filter(|(key, _)| key.starts_with(prefix))
        .collect();
    pairs.sort_by(|a, b| a.0.cmp(&b.0));
    debug!(prefix, count = pairs.len(), "Collected prefixed environment");
    pairs.into_iter().unzip()
}

/// Like [`load_prefixed`], after merging a dotenv-style file into the
/// process environment.
///
/// With an explicit `path` the file must load; without one, a missing
/// default `.env` is not an error. Existing process variables are never
/// overridden by file entries.
pub fn load_prefixed_with_dotenv(
    prefix: &str,
    path: Option<&Path>,
) -> SessionResult<(Vec<String>, Vec<String>)> {
    match path {
        Some(path) => {
            dotenvy::from_path(path).map_err(SessionError::Env)?;
        }
        None => {
            let _ = dotenvy::dotenv();
        }
    }
    Ok(load_prefixed(prefix))
}
