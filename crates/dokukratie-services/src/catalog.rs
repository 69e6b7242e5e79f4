//! Catalog and archive manifest fetching.

use dokukratie_archive::ArchiveManifest;
use dokukratie_core::models::Resource;
use dokukratie_core::{Catalog, ImportError};
use reqwest::Client;

/// Fetch and parse the dataset catalog.
pub async fn fetch_catalog(http: &Client, url: &str) -> Result<Catalog, ImportError> {
    let response = http
        .get(url)
        .send()
        .await
        .map_err(|e| ImportError::CatalogFetch(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ImportError::CatalogFetch(status.as_u16().to_string()));
    }

    let catalog: Catalog = response
        .json()
        .await
        .map_err(|e| ImportError::CatalogFetch(e.to_string()))?;

    tracing::info!(url, datasets = catalog.datasets.len(), "Loaded catalog");
    Ok(catalog)
}

/// Fetch the archive manifest a dataset resource points to.
pub async fn fetch_manifest(
    http: &Client,
    dataset: &str,
    resource: &Resource,
) -> Result<ArchiveManifest, ImportError> {
    let manifest_error = |message: String| ImportError::ManifestFetch {
        dataset: dataset.to_string(),
        message,
    };

    let response = http
        .get(&resource.url)
        .send()
        .await
        .map_err(|e| manifest_error(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(manifest_error(status.as_u16().to_string()));
    }

    let manifest: ArchiveManifest = response
        .json()
        .await
        .map_err(|e| manifest_error(e.to_string()))?;

    tracing::debug!(
        dataset,
        url = %resource.url,
        backend = %manifest.backend_type(),
        "Loaded archive manifest"
    );
    Ok(manifest)
}
