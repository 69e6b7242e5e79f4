//! Folder resolution inside a collection.
//!
//! Folders are plain ingest entities without a file, created synchronously so
//! their id can be used as a parent right away. Their foreign id is the slug
//! path from the collection root (`19-wahlperiode/drucksache/kleine-anfrage`),
//! which makes repeated creates upserts on the backend side.

use std::collections::HashMap;

use dokukratie_api_client::{with_retries, DocumentBackend};
use dokukratie_core::models::{FolderMetadata, IngestMetadata, IngestResponse, ParentRef};

/// A created folder: backend entity id and slug path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FolderKey {
    pub id: String,
    pub path: String,
}

/// URL-safe slug of `text`: ASCII-transliterated, lowercase, with every run of
/// other characters collapsed into a single `-`. `None` when nothing is left.
pub fn slugify(text: &str) -> Option<String> {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    let mut push = |c: char, slug: &mut String| {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    };

    for c in text.chars() {
        match transliterate(c) {
            Some(folded) => folded.chars().for_each(|f| push(f, &mut slug)),
            None => push(c, &mut slug),
        }
    }

    (!slug.is_empty()).then_some(slug)
}

fn transliterate(c: char) -> Option<&'static str> {
    let folded = match c {
        'ß' => "ss",
        'ä' | 'à' | 'á' | 'â' | 'ã' | 'å' | 'Ä' | 'À' | 'Á' | 'Â' | 'Ã' | 'Å' => "a",
        'æ' | 'Æ' => "ae",
        'ç' | 'Ç' => "c",
        'è' | 'é' | 'ê' | 'ë' | 'È' | 'É' | 'Ê' | 'Ë' => "e",
        'ì' | 'í' | 'î' | 'ï' | 'Ì' | 'Í' | 'Î' | 'Ï' => "i",
        'ñ' | 'Ñ' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' => "o",
        'œ' | 'Œ' => "oe",
        'ù' | 'ú' | 'û' | 'ü' | 'Ù' | 'Ú' | 'Û' | 'Ü' => "u",
        'ý' | 'ÿ' | 'Ý' => "y",
        _ => return None,
    };
    Some(folded)
}

type FolderCacheKey = (String, String, Option<FolderKey>);

/// Folders created during this run, keyed by collection, name and parent.
///
/// Only successful resolutions are cached, so a folder that failed once is
/// retried the next time a record needs it.
#[derive(Debug, Default)]
pub struct FolderCache {
    folders: HashMap<FolderCacheKey, FolderKey>,
    paths: HashMap<(String, Vec<String>), String>,
}

impl FolderCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached folders.
    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    /// Create (or reuse) the folder `name` below `parent`.
    ///
    /// Returns `None` when the name has no slug or the backend call failed;
    /// callers upload without a parent in that case.
    pub async fn resolve_folder(
        &mut self,
        backend: &dyn DocumentBackend,
        collection_id: &str,
        name: &str,
        parent: Option<&FolderKey>,
    ) -> Option<FolderKey> {
        let cache_key = (collection_id.to_string(), name.to_string(), parent.cloned());
        if let Some(folder) = self.folders.get(&cache_key) {
            return Some(folder.clone());
        }

        let Some(slug) = slugify(name) else {
            tracing::warn!(folder = name, "Cannot slugify folder name");
            return None;
        };
        let path = match parent {
            Some(parent) => format!("{}/{}", parent.path, slug),
            None => slug,
        };

        let metadata = IngestMetadata::from(FolderMetadata {
            file_name: name.to_string(),
            foreign_id: path.clone(),
            parent: parent.map(|p| ParentRef { id: p.id.clone() }),
        });

        let policy = backend.retry_policy();
        let result = with_retries(&policy, "create_folder", || {
            backend.ingest_upload(collection_id, None, &metadata, true)
        })
        .await;

        match result {
            Ok(IngestResponse { id: Some(id), .. }) => {
                tracing::debug!(collection_id, folder = %path, folder_id = %id, "Folder resolved");
                let folder = FolderKey { id, path };
                self.folders.insert(cache_key, folder.clone());
                Some(folder)
            }
            Ok(_) => {
                tracing::error!(collection_id, folder = %path, "Folder created without an id");
                None
            }
            Err(e) => {
                tracing::error!(
                    collection_id,
                    folder = %path,
                    error = %e,
                    "Failed to create folder"
                );
                None
            }
        }
    }

    /// Resolve nested folders `names[0]/names[1]/...` and return the id of the
    /// innermost one, or `None` if any level failed.
    pub async fn resolve_folder_path(
        &mut self,
        backend: &dyn DocumentBackend,
        collection_id: &str,
        names: &[String],
    ) -> Option<String> {
        let cache_key = (collection_id.to_string(), names.to_vec());
        if let Some(id) = self.paths.get(&cache_key) {
            return Some(id.clone());
        }

        let mut parent: Option<FolderKey> = None;
        for name in names {
            let folder = self
                .resolve_folder(backend, collection_id, name, parent.as_ref())
                .await?;
            parent = Some(folder);
        }

        let id = parent?.id;
        self.paths.insert(cache_key, id.clone());
        Some(id)
    }
}
