//! Domain methods for the Aleph API client.
//!
//! Request and response types live in `dokukratie_core::models`.

use std::path::Path;

use crate::error::{ApiError, ApiResult};
use crate::AlephClient;
use dokukratie_core::models::{
    Collection, CollectionData, CollectionList, IngestMetadata, IngestResponse,
};

impl AlephClient {
    /// Look up a collection by its foreign id. `None` if no collection matches.
    pub async fn get_collection_by_foreign_id(
        &self,
        foreign_id: &str,
    ) -> ApiResult<Option<Collection>> {
        let list: CollectionList = self
            .get(
                "/collections",
                &[("filter:foreign_id", foreign_id.to_string())],
            )
            .await?;
        Ok(list.results.into_iter().next())
    }

    /// Create a collection.
    pub async fn create_collection(&self, data: &CollectionData) -> ApiResult<Collection> {
        self.post_json("/collections", data).await
    }

    /// Update a collection's metadata.
    pub async fn update_collection(
        &self,
        collection_id: &str,
        data: &CollectionData,
    ) -> ApiResult<Collection> {
        self.put_json(&format!("/collections/{}", collection_id), data)
            .await
    }

    /// Ingest a document (or, without a file, a folder entity) into a collection.
    ///
    /// With `sync` the backend indexes the entity before responding, so its id
    /// can be used as a parent right away.
    pub async fn ingest_upload(
        &self,
        collection_id: &str,
        file: Option<&Path>,
        metadata: &IngestMetadata,
        sync: bool,
    ) -> ApiResult<IngestResponse> {
        let meta = serde_json::to_string(metadata)?;
        let mut form = reqwest::multipart::Form::new().text("meta", meta);

        if let Some(path) = file {
            let data = tokio::fs::read(path).await.map_err(|source| ApiError::File {
                path: path.display().to_string(),
                source,
            })?;
            let filename = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("upload")
                .to_string();
            form = form.part(
                "file",
                reqwest::multipart::Part::bytes(data).file_name(filename),
            );
        }

        let mut query = Vec::new();
        if sync {
            query.push(("sync", "true".to_string()));
        }

        self.post_multipart(
            &format!("/collections/{}/ingest", collection_id),
            &query,
            form,
        )
        .await
    }
}
