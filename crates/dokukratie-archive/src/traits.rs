//! Archive abstraction trait
//!
//! This module defines the Archive trait that all archive backends must implement.

use crate::ArchiveBackend;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Archive operation errors
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("Invalid content hash: {0}")]
    InvalidKey(String),

    #[error("Archive backend error: {0}")]
    BackendError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for archive operations
pub type ArchiveResult<T> = Result<T, ArchiveError>;

/// Read-only handle to a content-addressed archive
///
/// All backends (local filesystem, S3) implement this trait so the importer
/// can pull files without knowing where an archive lives.
#[async_trait]
pub trait Archive: Send + Sync {
    /// Find the key of the file stored for `content_hash`, if any.
    ///
    /// When several files share the hash prefix the lexicographically first
    /// key is returned.
    async fn locate_key(&self, content_hash: &str) -> ArchiveResult<Option<String>>;

    /// Copy the file stored for `content_hash` into `temp_dir` and return the
    /// local path. `None` means the archive holds no such file.
    ///
    /// The returned file is owned by the caller and may be deleted freely.
    async fn load_file(&self, content_hash: &str, temp_dir: &Path)
        -> ArchiveResult<Option<PathBuf>>;

    /// Get the archive backend type
    fn backend_type(&self) -> ArchiveBackend;
}
