//! Error types module
//!
//! `ImportError` covers the conditions that abort an import run: the catalog or
//! a manifest cannot be fetched, or the configuration is unusable. Per-record
//! and per-document failures are logged by the services and never surface here.

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("Fetch catalog failed: {0}")]
    CatalogFetch(String),

    #[error("Fetch resource failed for dataset {dataset}: {message}")]
    ManifestFetch { dataset: String, message: String },

    #[error("Invalid configuration: {0}")]
    Config(String),
}
