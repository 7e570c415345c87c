//! SHA-256 digests and byte sizing for in-memory buffers.

use sha2::{Digest, Sha256};

use crate::error::{Error, Result};

/// Compute the lowercase hex SHA-256 digest of a buffer.
///
/// An empty buffer is rejected as invalid input.
pub fn sha256_hex(data: &[u8]) -> Result<String> {
    if data.is_empty() {
        return Err(Error::invalid_input("cannot hash an empty buffer"));
    }
    let mut hasher = Sha256::new();
    hasher.update(data);
    Ok(format!("{:x}", hasher.finalize()))
}

/// Byte length of a buffer.
///
/// An empty buffer is rejected as invalid input, matching [`sha256_hex`].
pub fn byte_size(data: &[u8]) -> Result<u64> {
    if data.is_empty() {
        return Err(Error::invalid_input("cannot size an empty buffer"));
    }
    Ok(data.len() as u64)
}
