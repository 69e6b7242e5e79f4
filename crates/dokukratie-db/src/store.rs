use async_trait::async_trait;
use dokukratie_core::MetadataRecord;
use thiserror::Error;

/// Metadata store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid metadata in {path}: {message}")]
    InvalidMetadata { path: String, message: String },
}

/// Result type for metadata store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Per-dataset store of metadata records.
#[async_trait]
pub trait MetadataStore: Send + Sync {
    /// Sync the store with the dataset's metadata files. Returns the number of
    /// records seen. Import flags survive a refresh.
    async fn refresh(&mut self) -> StoreResult<usize>;

    /// All records, ordered by key.
    async fn records(&self) -> StoreResult<Vec<MetadataRecord>>;

    /// Persist a record's data and import flag.
    async fn save(&mut self, record: &MetadataRecord) -> StoreResult<()>;
}
