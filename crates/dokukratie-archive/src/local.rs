use crate::keys::{content_hash_prefix, temp_file_name};
use crate::traits::{Archive, ArchiveError, ArchiveResult};
use crate::ArchiveBackend;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Local filesystem archive implementation
#[derive(Clone, Debug)]
pub struct LocalArchive {
    base_path: PathBuf,
}

impl LocalArchive {
    /// Open an archive rooted at `base_path`
    ///
    /// The directory must already exist; archives are never created here.
    pub async fn new(base_path: impl Into<PathBuf>) -> ArchiveResult<Self> {
        let base_path = base_path.into();

        let is_dir = fs::metadata(&base_path)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false);
        if !is_dir {
            return Err(ArchiveError::ConfigError(format!(
                "Archive directory {} does not exist",
                base_path.display()
            )));
        }

        Ok(LocalArchive { base_path })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

#[async_trait]
impl Archive for LocalArchive {
    async fn locate_key(&self, content_hash: &str) -> ArchiveResult<Option<String>> {
        let prefix = content_hash_prefix(content_hash)?;
        let dir = self.base_path.join(&prefix);

        let mut entries = match fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();

        Ok(names.into_iter().next().map(|name| format!("{}/{}", prefix, name)))
    }

    async fn load_file(
        &self,
        content_hash: &str,
        temp_dir: &Path,
    ) -> ArchiveResult<Option<PathBuf>> {
        let Some(key) = self.locate_key(content_hash).await? else {
            return Ok(None);
        };

        let source = self.base_path.join(&key);
        let target = temp_dir.join(temp_file_name(content_hash, &key));
        let start = std::time::Instant::now();

        fs::create_dir_all(temp_dir).await?;
        let size = fs::copy(&source, &target).await.map_err(|e| {
            ArchiveError::DownloadFailed(format!(
                "Failed to copy {} to {}: {}",
                source.display(),
                target.display(),
                e
            ))
        })?;

        tracing::debug!(
            key = %key,
            path = %target.display(),
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local archive load successful"
        );

        Ok(Some(target))
    }

    fn backend_type(&self) -> ArchiveBackend {
        ArchiveBackend::File
    }
}
