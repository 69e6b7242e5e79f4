use std::fmt::{Display, Formatter, Result as FmtResult};

/// Archive backend types
///
/// Matches the `archive_type` tag of an archive manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchiveBackend {
    File,
    S3,
}

impl Display for ArchiveBackend {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ArchiveBackend::File => write!(f, "file"),
            ArchiveBackend::S3 => write!(f, "s3"),
        }
    }
}
