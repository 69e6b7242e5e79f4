use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ArchiveBackend;

/// Archive description published as a catalog resource.
///
/// ```json
/// {"archive_type": "s3", "bucket": "dokukratie", "prefix": "by"}
/// {"archive_type": "file", "path": "/data/archive/by"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "archive_type", rename_all = "lowercase")]
pub enum ArchiveManifest {
    File {
        path: PathBuf,
    },
    S3 {
        bucket: String,
        #[serde(default)]
        region: Option<String>,
        #[serde(default)]
        endpoint: Option<String>,
        #[serde(default)]
        prefix: Option<String>,
    },
}

impl ArchiveManifest {
    pub fn backend_type(&self) -> ArchiveBackend {
        match self {
            ArchiveManifest::File { .. } => ArchiveBackend::File,
            ArchiveManifest::S3 { .. } => ArchiveBackend::S3,
        }
    }
}
