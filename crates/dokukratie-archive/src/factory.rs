#[cfg(feature = "archive-file")]
use crate::LocalArchive;
#[cfg(feature = "archive-s3")]
use crate::S3Archive;
use crate::{Archive, ArchiveManifest, ArchiveResult};
use std::sync::Arc;

/// Open the archive described by a manifest
pub async fn open_archive(manifest: &ArchiveManifest) -> ArchiveResult<Arc<dyn Archive>> {
    match manifest {
        #[cfg(feature = "archive-s3")]
        ArchiveManifest::S3 {
            bucket,
            region,
            endpoint,
            prefix,
        } => {
            let archive = S3Archive::new(
                bucket.clone(),
                region.clone(),
                endpoint.clone(),
                prefix.clone(),
            )?;
            Ok(Arc::new(archive))
        }

        #[cfg(not(feature = "archive-s3"))]
        ArchiveManifest::S3 { .. } => Err(crate::ArchiveError::ConfigError(
            "S3 archive backend not available (archive-s3 feature not enabled)".to_string(),
        )),

        #[cfg(feature = "archive-file")]
        ArchiveManifest::File { path } => {
            let archive = LocalArchive::new(path.clone()).await?;
            Ok(Arc::new(archive))
        }

        #[cfg(not(feature = "archive-file"))]
        ArchiveManifest::File { .. } => Err(crate::ArchiveError::ConfigError(
            "File archive backend not available (archive-file feature not enabled)".to_string(),
        )),
    }
}

#[cfg(all(test, feature = "archive-file"))]
mod tests {
    use super::*;
    use crate::{ArchiveBackend, ArchiveError};

    #[tokio::test]
    async fn opens_file_archive() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = ArchiveManifest::File {
            path: dir.path().to_path_buf(),
        };
        let archive = open_archive(&manifest).await.unwrap();
        assert_eq!(archive.backend_type(), ArchiveBackend::File);
    }

    #[tokio::test]
    async fn missing_file_archive_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = ArchiveManifest::File {
            path: dir.path().join("missing"),
        };
        let err = open_archive(&manifest).await.err().unwrap();
        assert!(matches!(err, ArchiveError::ConfigError(_)));
    }
}
