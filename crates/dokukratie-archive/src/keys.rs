//! Shared key layout for archive backends.

use crate::traits::{ArchiveError, ArchiveResult};

/// Directory prefix holding all files of one content hash:
/// `ab/cd/ef/abcdef...`.
pub fn content_hash_prefix(content_hash: &str) -> ArchiveResult<String> {
    if content_hash.len() < 6 || !content_hash.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ArchiveError::InvalidKey(content_hash.to_string()));
    }
    Ok(format!(
        "{}/{}/{}/{}",
        &content_hash[0..2],
        &content_hash[2..4],
        &content_hash[4..6],
        content_hash
    ))
}

/// Last path segment of a key.
pub fn key_file_name(key: &str) -> &str {
    key.rsplit('/').next().unwrap_or(key)
}

/// Local file name for a materialized copy of `key`.
pub fn temp_file_name(content_hash: &str, key: &str) -> String {
    format!("{}_{}", content_hash, key_file_name(key))
}
