//! Metadata record store
//!
//! Every dataset ships one JSON metadata file per crawled document. The store
//! mirrors those files into a SQLite state database and tracks which records
//! have already been imported, so repeated runs only upload new documents.

pub mod sqlite;
pub mod store;

pub use sqlite::SqliteMetadataStore;
pub use store::{MetadataStore, StoreError, StoreResult};
