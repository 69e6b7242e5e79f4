//! Document backend abstraction
//!
//! The import services only talk to the backend through this trait, so they
//! can run against the HTTP client or an in-memory fake.

use std::path::Path;

use async_trait::async_trait;
use dokukratie_core::models::{Collection, CollectionData, IngestMetadata, IngestResponse};

use crate::error::ApiResult;
use crate::retry::RetryPolicy;
use crate::AlephClient;

#[async_trait]
pub trait DocumentBackend: Send + Sync {
    /// Retry budget and backoff applied to this backend's transient failures.
    fn retry_policy(&self) -> RetryPolicy;

    async fn get_collection_by_foreign_id(
        &self,
        foreign_id: &str,
    ) -> ApiResult<Option<Collection>>;

    async fn create_collection(&self, data: &CollectionData) -> ApiResult<Collection>;

    async fn update_collection(
        &self,
        collection_id: &str,
        data: &CollectionData,
    ) -> ApiResult<Collection>;

    async fn ingest_upload(
        &self,
        collection_id: &str,
        file: Option<&Path>,
        metadata: &IngestMetadata,
        sync: bool,
    ) -> ApiResult<IngestResponse>;
}

#[async_trait]
impl DocumentBackend for AlephClient {
    fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    async fn get_collection_by_foreign_id(
        &self,
        foreign_id: &str,
    ) -> ApiResult<Option<Collection>> {
        AlephClient::get_collection_by_foreign_id(self, foreign_id).await
    }

    async fn create_collection(&self, data: &CollectionData) -> ApiResult<Collection> {
        AlephClient::create_collection(self, data).await
    }

    async fn update_collection(
        &self,
        collection_id: &str,
        data: &CollectionData,
    ) -> ApiResult<Collection> {
        AlephClient::update_collection(self, collection_id, data).await
    }

    async fn ingest_upload(
        &self,
        collection_id: &str,
        file: Option<&Path>,
        metadata: &IngestMetadata,
        sync: bool,
    ) -> ApiResult<IngestResponse> {
        AlephClient::ingest_upload(self, collection_id, file, metadata, sync).await
    }
}
