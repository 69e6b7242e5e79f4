/// Well-known location of the dokukratie dataset catalog.
pub const CATALOG_URL: &str = "https://s3.investigativedata.org/dokukratie/catalog.json";

/// MIME type marking the catalog resource that holds a dataset's archive manifest.
pub const ARCHIVE_MIME: &str = "application/json+archive";

/// Crawler tag attached to every uploaded document.
pub const CRAWLER: &str = "dokukratie";

/// Namespace prefix of every collection foreign id.
pub const COLLECTION_PREFIX: &str = "de_dokukratie_";

/// Language prefix stripped from dataset names before namespacing.
pub const LANGUAGE_PREFIX: &str = "de_";

pub const DEFAULT_CATEGORY: &str = "library";
pub const DEFAULT_FREQUENCY: &str = "weekly";
