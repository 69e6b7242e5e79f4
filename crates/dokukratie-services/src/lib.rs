//! Dokukratie import services
//!
//! Turns catalog datasets and their metadata records into backend collections,
//! folders and documents. The [`Importer`] drives a run; the remaining modules
//! are the pieces it is assembled from and can be used on their own.

pub mod catalog;
pub mod collections;
pub mod families;
pub mod folders;
pub mod importer;
pub mod mapping;
pub mod stats;
pub mod upload;

#[cfg(test)]
pub(crate) mod test_support;

pub use collections::{collection_data, collection_foreign_id, ensure_collection};
pub use families::{family_for, DatasetFamily};
pub use folders::{slugify, FolderCache, FolderKey};
pub use importer::Importer;
pub use mapping::{build_payload, classify_document_type};
pub use stats::{ImportStats, RecordOutcome, SkipReason};
pub use upload::upload_document;
