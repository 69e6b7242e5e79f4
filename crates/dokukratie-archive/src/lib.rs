//! Dokukratie Archive Library
//!
//! This crate provides read access to the content-addressed archives that hold
//! the crawled documents of each dataset. An archive is described by a JSON
//! manifest published in the dataset catalog; [`open_archive`] turns that
//! manifest into an [`Archive`] handle.
//!
//! # Key format
//!
//! Files are stored under a prefix derived from their content hash:
//!
//! - `{h[0..2]}/{h[2..4]}/{h[4..6]}/{h}/{file name}`
//!
//! Next to a payload there may be a `.json` sidecar; callers decide whether a
//! located key is usable.

pub mod factory;
pub(crate) mod keys;
#[cfg(feature = "archive-file")]
pub mod local;
pub mod manifest;
#[cfg(feature = "archive-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use dokukratie_core::ArchiveBackend;
pub use factory::open_archive;
#[cfg(feature = "archive-file")]
pub use local::LocalArchive;
pub use manifest::ArchiveManifest;
#[cfg(feature = "archive-s3")]
pub use s3::S3Archive;
pub use traits::{Archive, ArchiveError, ArchiveResult};
