//! In-memory fakes of the backend and metadata store.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use dokukratie_api_client::{ApiError, ApiResult, DocumentBackend, RetryPolicy};
use dokukratie_core::models::{Collection, CollectionData, IngestMetadata, IngestResponse};
use dokukratie_core::MetadataRecord;
use dokukratie_db::{MetadataStore, StoreError, StoreResult};
use serde_json::Value;

#[derive(Debug, Clone)]
pub(crate) struct IngestCall {
    pub collection_id: String,
    pub file: Option<PathBuf>,
    pub file_contents: Option<Vec<u8>>,
    pub metadata: Value,
    pub sync: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum CollectionCall {
    Lookup(String),
    Create(CollectionData),
    Update(String, CollectionData),
}

#[derive(Default)]
pub(crate) struct FakeBackend {
    existing: Mutex<Vec<Collection>>,
    collection_calls: Mutex<Vec<CollectionCall>>,
    ingests: Mutex<Vec<IngestCall>>,
    failures: Mutex<VecDeque<ApiError>>,
    created: Mutex<u32>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collection(self, collection: Collection) -> Self {
        self.existing.lock().unwrap().push(collection);
        self
    }

    /// Make the next ingest call fail with `error`; queued failures are
    /// consumed in order before calls succeed again.
    pub fn fail_next_ingest(&self, error: ApiError) {
        self.failures.lock().unwrap().push_back(error);
    }

    pub fn ingests(&self) -> Vec<IngestCall> {
        self.ingests.lock().unwrap().clone()
    }

    pub fn documents(&self) -> Vec<IngestCall> {
        self.ingests().into_iter().filter(|c| c.file.is_some()).collect()
    }

    pub fn folders(&self) -> Vec<IngestCall> {
        self.ingests().into_iter().filter(|c| c.file.is_none()).collect()
    }

    pub fn collection_calls(&self) -> Vec<CollectionCall> {
        self.collection_calls.lock().unwrap().clone()
    }

    fn next_id(&self) -> u32 {
        let mut created = self.created.lock().unwrap();
        *created += 1;
        *created
    }
}

#[async_trait]
impl DocumentBackend for FakeBackend {
    fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            retries: 3,
            base_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(2),
        }
    }

    async fn get_collection_by_foreign_id(
        &self,
        foreign_id: &str,
    ) -> ApiResult<Option<Collection>> {
        self.collection_calls
            .lock()
            .unwrap()
            .push(CollectionCall::Lookup(foreign_id.to_string()));
        Ok(self
            .existing
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.foreign_id.as_deref() == Some(foreign_id))
            .cloned())
    }

    async fn create_collection(&self, data: &CollectionData) -> ApiResult<Collection> {
        self.collection_calls
            .lock()
            .unwrap()
            .push(CollectionCall::Create(data.clone()));
        Ok(Collection {
            collection_id: Some("42".to_string()),
            foreign_id: data.foreign_id.clone(),
            ..Collection::default()
        })
    }

    async fn update_collection(
        &self,
        collection_id: &str,
        data: &CollectionData,
    ) -> ApiResult<Collection> {
        self.collection_calls
            .lock()
            .unwrap()
            .push(CollectionCall::Update(collection_id.to_string(), data.clone()));
        Ok(Collection {
            id: Some(collection_id.to_string()),
            ..Collection::default()
        })
    }

    async fn ingest_upload(
        &self,
        collection_id: &str,
        file: Option<&Path>,
        metadata: &IngestMetadata,
        sync: bool,
    ) -> ApiResult<IngestResponse> {
        self.ingests.lock().unwrap().push(IngestCall {
            collection_id: collection_id.to_string(),
            file: file.map(Path::to_path_buf),
            file_contents: file.and_then(|p| std::fs::read(p).ok()),
            metadata: serde_json::to_value(metadata)?,
            sync,
        });

        if let Some(error) = self.failures.lock().unwrap().pop_front() {
            return Err(error);
        }

        let kind = if file.is_some() { "doc" } else { "folder" };
        Ok(IngestResponse {
            id: Some(format!("{}-{}", kind, self.next_id())),
            status: Some("ok".to_string()),
        })
    }
}

/// Metadata store holding its records in memory.
#[derive(Default)]
pub(crate) struct MemoryStore {
    pub records: Vec<MetadataRecord>,
    pub saved: Vec<MetadataRecord>,
    pub refreshes: usize,
    pub fail_saves: bool,
}

impl MemoryStore {
    pub fn new(records: Vec<MetadataRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }
}

#[async_trait]
impl MetadataStore for MemoryStore {
    async fn refresh(&mut self) -> StoreResult<usize> {
        self.refreshes += 1;
        Ok(self.records.len())
    }

    async fn records(&self) -> StoreResult<Vec<MetadataRecord>> {
        Ok(self.records.clone())
    }

    async fn save(&mut self, record: &MetadataRecord) -> StoreResult<()> {
        if self.fail_saves {
            return Err(StoreError::Io(std::io::Error::other("disk full")));
        }
        if let Some(existing) = self.records.iter_mut().find(|r| r.key() == record.key()) {
            *existing = record.clone();
        }
        self.saved.push(record.clone());
        Ok(())
    }
}
