//! Document upload with bounded retries.

use std::path::Path;

use dokukratie_api_client::{with_retries, DocumentBackend};
use dokukratie_core::models::{IngestMetadata, IngestResponse};
use dokukratie_core::UploadPayload;

/// Upload `path` with `payload` as its metadata.
///
/// Never fails the caller: permanent errors and exhausted retries are logged
/// and reported as `None`.
pub async fn upload_document(
    backend: &dyn DocumentBackend,
    collection_id: &str,
    payload: &UploadPayload,
    path: &Path,
) -> Option<IngestResponse> {
    let metadata = IngestMetadata::from(payload.clone());
    let policy = backend.retry_policy();
    let started = std::time::Instant::now();

    let result = with_retries(&policy, "upload_document", || {
        backend.ingest_upload(collection_id, Some(path), &metadata, false)
    })
    .await;

    match result {
        Ok(response) => {
            tracing::info!(
                collection_id,
                file = payload.label(),
                document_id = ?response.id,
                duration_ms = started.elapsed().as_millis() as u64,
                "Uploaded document"
            );
            Some(response)
        }
        Err(e) => {
            tracing::error!(
                collection_id,
                file = payload.label(),
                foreign_id = ?payload.foreign_id,
                error = %e,
                "Failed to upload document"
            );
            None
        }
    }
}
