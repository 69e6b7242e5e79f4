use crate::keys::{content_hash_prefix, temp_file_name};
use crate::traits::{Archive, ArchiveError, ArchiveResult};
use crate::ArchiveBackend;
use async_trait::async_trait;
use futures::TryStreamExt;
use object_store::aws::{AmazonS3, AmazonS3Builder};
use object_store::path::Path as ObjectPath;
use object_store::Error as ObjectStoreError;
use object_store::{ObjectStore, ObjectStoreExt};
use std::path::{Path, PathBuf};
use tokio::fs;

/// S3 archive implementation
#[derive(Clone)]
pub struct S3Archive {
    store: AmazonS3,
    bucket: String,
    root: Option<String>,
}

impl S3Archive {
    /// Create a new S3Archive instance
    ///
    /// # Arguments
    /// * `bucket` - S3 bucket name
    /// * `region` - AWS region; falls back to the environment when `None`
    /// * `endpoint_url` - Optional custom endpoint for S3-compatible providers
    /// * `root` - Optional key prefix under which the archive lives
    pub fn new(
        bucket: String,
        region: Option<String>,
        endpoint_url: Option<String>,
        root: Option<String>,
    ) -> ArchiveResult<Self> {
        // Credentials come from the standard AWS environment variables.
        let mut builder = AmazonS3Builder::from_env().with_bucket_name(bucket.clone());

        if let Some(region) = region {
            builder = builder.with_region(region);
        }

        if let Some(ref endpoint) = endpoint_url {
            let allow_http = endpoint.starts_with("http://");
            builder = builder
                .with_endpoint(endpoint.clone())
                .with_allow_http(allow_http);
        }

        let store = builder
            .build()
            .map_err(|e| ArchiveError::ConfigError(e.to_string()))?;

        let root = root
            .map(|r| r.trim_matches('/').to_string())
            .filter(|r| !r.is_empty());

        Ok(S3Archive {
            store,
            bucket,
            root,
        })
    }

    fn object_path(&self, key: &str) -> ObjectPath {
        match &self.root {
            Some(root) => ObjectPath::from(format!("{}/{}", root, key)),
            None => ObjectPath::from(key),
        }
    }

    fn relative_key(&self, location: &ObjectPath) -> String {
        let location = location.to_string();
        match &self.root {
            Some(root) => location
                .strip_prefix(root.as_str())
                .map(|rest| rest.trim_start_matches('/').to_string())
                .unwrap_or(location),
            None => location,
        }
    }
}

#[async_trait]
impl Archive for S3Archive {
    async fn locate_key(&self, content_hash: &str) -> ArchiveResult<Option<String>> {
        let prefix = self.object_path(&content_hash_prefix(content_hash)?);

        let objects: Vec<_> = self
            .store
            .list(Some(&prefix))
            .try_collect()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    bucket = %self.bucket,
                    prefix = %prefix,
                    "S3 archive list failed"
                );
                ArchiveError::BackendError(e.to_string())
            })?;

        let mut keys: Vec<String> = objects
            .iter()
            .map(|meta| self.relative_key(&meta.location))
            .collect();
        keys.sort();

        Ok(keys.into_iter().next())
    }

    async fn load_file(
        &self,
        content_hash: &str,
        temp_dir: &Path,
    ) -> ArchiveResult<Option<PathBuf>> {
        let Some(key) = self.locate_key(content_hash).await? else {
            return Ok(None);
        };

        let location = self.object_path(&key);
        let start = std::time::Instant::now();

        let result = match self.store.get(&location).await {
            Ok(result) => result,
            Err(ObjectStoreError::NotFound { .. }) => return Ok(None),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    bucket = %self.bucket,
                    key = %key,
                    "S3 archive download failed"
                );
                return Err(ArchiveError::DownloadFailed(e.to_string()));
            }
        };

        let bytes = result
            .bytes()
            .await
            .map_err(|e| ArchiveError::DownloadFailed(e.to_string()))?;

        fs::create_dir_all(temp_dir).await?;
        let target = temp_dir.join(temp_file_name(content_hash, &key));
        fs::write(&target, &bytes).await?;

        tracing::debug!(
            bucket = %self.bucket,
            key = %key,
            size_bytes = bytes.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 archive download successful"
        );

        Ok(Some(target))
    }

    fn backend_type(&self) -> ArchiveBackend {
        ArchiveBackend::S3
    }
}
