pub mod catalog;
pub mod collection;
pub mod payload;
pub mod record;

pub use catalog::{Catalog, DataResource, Dataset, Publisher, Resource};
pub use collection::{Collection, CollectionData, CollectionList};
pub use payload::{FolderMetadata, IngestMetadata, IngestResponse, ParentRef, UploadPayload};
pub use record::MetadataRecord;
