//! Dokukratie Core Library
//!
//! This crate provides the domain models, error types and configuration shared
//! by the archive, API client, metadata store and import service crates.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod storage_types;

// Re-export commonly used types
pub use config::ImportConfig;
pub use error::ImportError;
pub use models::{
    Catalog, Collection, CollectionData, Dataset, FolderMetadata, IngestMetadata,
    IngestResponse, MetadataRecord, ParentRef, Publisher, Resource, UploadPayload,
};
pub use storage_types::ArchiveBackend;
