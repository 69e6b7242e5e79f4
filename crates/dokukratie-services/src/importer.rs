//! Import orchestration.
//!
//! One run walks the catalog, and for every selected dataset resolves its
//! collection, refreshes its metadata store and pushes every record that is not
//! yet imported through archive lookup, field mapping, folder resolution and
//! upload. Everything happens sequentially.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use dokukratie_api_client::DocumentBackend;
use dokukratie_archive::{open_archive, Archive};
use dokukratie_core::{Dataset, ImportConfig, MetadataRecord};
use dokukratie_db::{MetadataStore, SqliteMetadataStore};
use tempfile::TempDir;

use crate::catalog::{fetch_catalog, fetch_manifest};
use crate::collections::ensure_collection;
use crate::families::family_for;
use crate::folders::FolderCache;
use crate::mapping::build_payload;
use crate::stats::{ImportStats, RecordOutcome, SkipReason};
use crate::upload::upload_document;

pub struct Importer {
    config: ImportConfig,
    http: reqwest::Client,
    backend: Arc<dyn DocumentBackend>,
    folders: FolderCache,
    temp_dir: PathBuf,
    // Removes the run's scratch directory on drop when none was configured.
    _scratch: Option<TempDir>,
}

impl Importer {
    pub fn new(config: ImportConfig, backend: Arc<dyn DocumentBackend>) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        let (temp_dir, scratch) = match &config.temp_dir {
            Some(dir) => {
                std::fs::create_dir_all(dir).with_context(|| {
                    format!("Failed to create temp directory {}", dir.display())
                })?;
                (dir.clone(), None)
            }
            None => {
                let scratch = tempfile::Builder::new()
                    .prefix("dokukratie-import-")
                    .tempdir()
                    .context("Failed to create temp directory")?;
                (scratch.path().to_path_buf(), Some(scratch))
            }
        };

        Ok(Self {
            config,
            http,
            backend,
            folders: FolderCache::new(),
            temp_dir,
            _scratch: scratch,
        })
    }

    /// Directory receiving materialized archive files.
    pub fn temp_dir(&self) -> &Path {
        &self.temp_dir
    }

    /// Import every catalog dataset, or only `include` when given.
    pub async fn run(&mut self, include: Option<&str>) -> anyhow::Result<ImportStats> {
        let catalog = fetch_catalog(&self.http, &self.config.catalog_url).await?;
        let mut stats = ImportStats::default();
        let mut matched = false;

        for dataset in &catalog.datasets {
            if include.is_some_and(|name| name != dataset.name) {
                tracing::info!(dataset = %dataset.name, "Skipping dataset");
                continue;
            }
            matched = true;
            tracing::info!(dataset = %dataset.name, "Loaded dataset");

            let Some(resource) = dataset.archive_resource(&self.config.archive_mime_type) else {
                tracing::warn!(
                    dataset = %dataset.name,
                    mime_type = %self.config.archive_mime_type,
                    "No archive resource, skipping dataset"
                );
                stats.datasets_skipped += 1;
                continue;
            };

            let manifest = fetch_manifest(&self.http, &dataset.name, resource).await?;
            let archive = open_archive(&manifest)
                .await
                .with_context(|| format!("Failed to open archive of dataset {}", dataset.name))?;

            let metadata_dir = self.config.dataset_metadata_dir(&dataset.name);
            let mut store = SqliteMetadataStore::open(&metadata_dir).await.with_context(|| {
                format!("Failed to open metadata store at {}", metadata_dir.display())
            })?;

            let dataset_stats = self
                .import_dataset(dataset, archive.as_ref(), &mut store)
                .await?;
            stats.merge(&dataset_stats);
        }

        if let Some(name) = include.filter(|_| !matched) {
            tracing::warn!(dataset = name, "Dataset not found in catalog");
        }

        stats.log("run");
        Ok(stats)
    }

    /// Import the records of one dataset from `archive`, tracking progress in
    /// `store`.
    pub async fn import_dataset(
        &mut self,
        dataset: &Dataset,
        archive: &dyn Archive,
        store: &mut dyn MetadataStore,
    ) -> anyhow::Result<ImportStats> {
        let collection_id = ensure_collection(
            self.backend.as_ref(),
            dataset,
            self.config.default_frequency.as_deref(),
        )
        .await
        .with_context(|| format!("Failed to resolve collection of dataset {}", dataset.name))?;

        store
            .refresh()
            .await
            .with_context(|| format!("Failed to refresh metadata of dataset {}", dataset.name))?;
        let records = store
            .records()
            .await
            .with_context(|| format!("Failed to read metadata of dataset {}", dataset.name))?;

        tracing::info!(
            dataset = %dataset.name,
            collection_id = %collection_id,
            records = records.len(),
            archive = %archive.backend_type(),
            "Importing dataset"
        );

        let mut stats = ImportStats {
            datasets: 1,
            ..ImportStats::default()
        };
        for record in records {
            let key = record.key().to_string();
            let outcome = self
                .import_record(&dataset.name, &collection_id, archive, store, record, &mut stats)
                .await;
            if let RecordOutcome::Skipped(reason) = outcome {
                tracing::debug!(
                    dataset = %dataset.name,
                    key = %key,
                    reason = %reason,
                    "Record skipped"
                );
            }
            stats.record(outcome);
        }

        stats.log(&dataset.name);
        Ok(stats)
    }

    async fn import_record(
        &mut self,
        dataset: &str,
        collection_id: &str,
        archive: &dyn Archive,
        store: &mut dyn MetadataStore,
        mut record: MetadataRecord,
        stats: &mut ImportStats,
    ) -> RecordOutcome {
        if record.is_imported() {
            return RecordOutcome::Skipped(SkipReason::AlreadyImported);
        }

        let parliamentary = record.get_str("publisher:type") == Some("parliament");
        if parliamentary && !record.has("legislative_term") {
            return RecordOutcome::Skipped(SkipReason::Ineligible);
        }

        let content_hash = record.content_hash().unwrap_or(record.key()).to_string();

        match archive.locate_key(&content_hash).await {
            Ok(Some(key)) if key.ends_with(".json") => {
                tracing::warn!(
                    dataset,
                    content_hash = %content_hash,
                    key = %key,
                    "Archive key is a manifest, skipping"
                );
                return RecordOutcome::Skipped(SkipReason::ManifestKey);
            }
            Ok(_) => {}
            Err(e) => {
                tracing::error!(
                    dataset,
                    content_hash = %content_hash,
                    error = %e,
                    "Archive lookup failed"
                );
                return RecordOutcome::Skipped(SkipReason::ArchiveError);
            }
        }

        let path = match archive.load_file(&content_hash, &self.temp_dir).await {
            Ok(Some(path)) => path,
            Ok(None) => {
                tracing::warn!(dataset, content_hash = %content_hash, "No archived file, skipping");
                return RecordOutcome::Skipped(SkipReason::NotArchived);
            }
            Err(e) => {
                tracing::error!(
                    dataset,
                    content_hash = %content_hash,
                    error = %e,
                    "Failed to load archived file"
                );
                return RecordOutcome::Skipped(SkipReason::ArchiveError);
            }
        };

        let outcome = self
            .upload_record(dataset, collection_id, store, &mut record, &path, stats)
            .await;

        if let Err(e) = tokio::fs::remove_file(&path).await {
            tracing::warn!(path = %path.display(), error = %e, "Failed to remove temporary file");
        }
        outcome
    }

    async fn upload_record(
        &mut self,
        dataset: &str,
        collection_id: &str,
        store: &mut dyn MetadataStore,
        record: &mut MetadataRecord,
        path: &Path,
        stats: &mut ImportStats,
    ) -> RecordOutcome {
        if record.foreign_id().is_none() {
            let reference = record.get("reference").cloned().unwrap_or_default();
            record.set("foreign_id", reference);
        }

        let Some(family) = family_for(dataset) else {
            tracing::error!(dataset, key = record.key(), "Unsupported dataset");
            return RecordOutcome::Skipped(SkipReason::UnsupportedDataset);
        };

        let mut payload = build_payload(record, family.ensure_reference_in_name());

        match family.folder_path(record, &payload) {
            Some(names) => {
                let parent = self
                    .folders
                    .resolve_folder_path(self.backend.as_ref(), collection_id, &names)
                    .await;
                match parent {
                    Some(id) => payload.set_parent_id(&id),
                    None => tracing::warn!(
                        dataset,
                        folder = ?names,
                        "Folder unavailable, uploading without parent"
                    ),
                }
            }
            None => tracing::debug!(dataset, key = record.key(), "No folder for record"),
        }
        family.apply_file_name_rule(&mut payload);

        if upload_document(self.backend.as_ref(), collection_id, &payload, path)
            .await
            .is_none()
        {
            return RecordOutcome::UploadFailed;
        }

        record.mark_imported();
        if let Err(e) = store.save(record).await {
            tracing::error!(
                dataset,
                key = record.key(),
                error = %e,
                "Failed to persist imported flag"
            );
            stats.unsaved += 1;
        }
        RecordOutcome::Imported
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{CollectionCall, FakeBackend, MemoryStore};
    use dokukratie_api_client::ApiError;
    use dokukratie_archive::LocalArchive;
    use serde_json::{json, Value};

    const HASH_BY: &str = "abc123def456";
    const HASH_2: &str = "fed654cba321";

    fn record(value: Value) -> MetadataRecord {
        MetadataRecord::from_value(value).unwrap()
    }

    fn dataset(name: &str) -> Dataset {
        Dataset {
            name: name.to_string(),
            title: Some(format!("Dataset {}", name)),
            ..Dataset::default()
        }
    }

    struct Fixture {
        backend: Arc<FakeBackend>,
        importer: Importer,
        archive: LocalArchive,
        _archive_dir: TempDir,
        _temp_dir: TempDir,
    }

    /// Importer with a fake backend and a file archive holding `files`
    /// (`(content_hash, file_name)`).
    async fn fixture(files: &[(&str, &str)]) -> Fixture {
        let archive_dir = tempfile::tempdir().unwrap();
        for (hash, name) in files {
            let dir = archive_dir
                .path()
                .join(&hash[0..2])
                .join(&hash[2..4])
                .join(&hash[4..6])
                .join(hash);
            std::fs::create_dir_all(&dir).unwrap();
            std::fs::write(dir.join(name), format!("content of {}", hash)).unwrap();
        }
        let archive = LocalArchive::new(archive_dir.path()).await.unwrap();

        let temp_dir = tempfile::tempdir().unwrap();
        let config = ImportConfig {
            temp_dir: Some(temp_dir.path().to_path_buf()),
            ..ImportConfig::default()
        };
        let backend = Arc::new(FakeBackend::new());
        let importer = Importer::new(config, backend.clone()).unwrap();

        Fixture {
            backend,
            importer,
            archive,
            _archive_dir: archive_dir,
            _temp_dir: temp_dir,
        }
    }

    fn temp_files(importer: &Importer) -> usize {
        std::fs::read_dir(importer.temp_dir()).unwrap().count()
    }

    #[tokio::test]
    async fn state_record_is_filed_by_term_and_type() {
        let mut f = fixture(&[(HASH_BY, "drs_19_123.pdf")]).await;
        let mut store = MemoryStore::new(vec![record(json!({
            "content_hash": HASH_BY,
            "foreign_id": "",
            "reference": "R1",
            "legislative_term": "19",
            "publisher:type": "parliament",
            "document_type": "minor_interpellation",
            "title": "X"
        }))]);

        let stats = f
            .importer
            .import_dataset(&dataset("by"), &f.archive, &mut store)
            .await
            .unwrap();
        assert_eq!(stats.imported, 1);

        let folders = f.backend.folders();
        let names: Vec<_> = folders
            .iter()
            .map(|c| c.metadata["file_name"].clone())
            .collect();
        assert_eq!(
            names,
            vec![
                json!("19. Wahlperiode"),
                json!("Drucksache"),
                json!("Kleine Anfrage")
            ]
        );

        let documents = f.backend.documents();
        assert_eq!(documents.len(), 1);
        let meta = &documents[0].metadata;
        assert_eq!(meta["foreign_id"], "R1");
        assert_eq!(meta["name"], "X");
        assert_eq!(meta["parent"], json!({"id": "folder-3"}));
        assert_eq!(documents[0].collection_id, "42");
        assert_eq!(
            documents[0].file_contents.as_deref(),
            Some(format!("content of {}", HASH_BY).as_bytes())
        );

        assert_eq!(store.refreshes, 1);
        assert_eq!(store.saved.len(), 1);
        assert!(store.saved[0].is_imported());
        assert_eq!(store.saved[0].foreign_id(), Some("R1"));
        assert_eq!(temp_files(&f.importer), 0);
    }

    #[tokio::test]
    async fn publisher_record_is_filed_by_publisher() {
        let mut f = fixture(&[(HASH_BY, "gutachten.pdf"), (HASH_2, "other.pdf")]).await;
        let mut store = MemoryStore::new(vec![
            record(json!({
                "content_hash": HASH_BY,
                "publisher:name": "ACME",
                "title": "Report"
            })),
            record(json!({
                "content_hash": HASH_2,
                "publisher:name": "ACME",
                "reference": "WD 3 - 001/21",
                "title": "Report"
            })),
        ]);

        f.importer
            .import_dataset(&dataset("sehrgutachten"), &f.archive, &mut store)
            .await
            .unwrap();

        let folders = f.backend.folders();
        assert_eq!(folders.len(), 1);
        assert_eq!(folders[0].metadata["foreign_id"], "acme");

        let documents = f.backend.documents();
        assert_eq!(documents[0].metadata["name"], "Report");
        assert_eq!(documents[0].metadata["parent"], json!({"id": "folder-1"}));
        assert_eq!(documents[1].metadata["name"], "WD 3 - 001/21 - Report");
        assert_eq!(documents[1].metadata["parent"], json!({"id": "folder-1"}));
    }

    #[tokio::test]
    async fn unsupported_dataset_uploads_nothing() {
        let mut f = fixture(&[(HASH_BY, "a.pdf"), (HASH_2, "b.pdf")]).await;
        let mut store = MemoryStore::new(vec![
            record(json!({"content_hash": HASH_BY, "title": "A"})),
            record(json!({"content_hash": HASH_2, "title": "B"})),
        ]);

        let stats = f
            .importer
            .import_dataset(&dataset("unknown_ds"), &f.archive, &mut store)
            .await
            .unwrap();

        assert_eq!(stats.unsupported, 2);
        assert!(f.backend.ingests().is_empty());
        assert!(store.saved.is_empty());
        assert_eq!(temp_files(&f.importer), 0);
    }

    #[tokio::test]
    async fn skips_ineligible_and_archive_misses() {
        let mut f = fixture(&[(HASH_2, "manifest.json")]).await;
        let mut store = MemoryStore::new(vec![
            record(json!({"content_hash": "aaa111bbb222", "title": "done"})).with_imported(true),
            record(json!({
                "content_hash": "ccc333ddd444",
                "publisher:type": "parliament",
                "title": "no term"
            })),
            record(json!({"content_hash": HASH_2, "legislative_term": 7, "title": "manifest"})),
            record(json!({"content_hash": "eee555fff666", "legislative_term": 7, "title": "gone"})),
        ]);

        let stats = f
            .importer
            .import_dataset(&dataset("by"), &f.archive, &mut store)
            .await
            .unwrap();

        assert_eq!(stats.seen, 4);
        assert_eq!(stats.already_imported, 1);
        assert_eq!(stats.ineligible, 1);
        assert_eq!(stats.manifest_keys, 1);
        assert_eq!(stats.not_archived, 1);
        assert_eq!(stats.imported, 0);
        assert!(f.backend.ingests().is_empty());
        assert!(store.saved.is_empty());
    }

    #[tokio::test]
    async fn zero_or_false_term_is_ineligible_for_parliaments() {
        let mut f = fixture(&[(HASH_BY, "a.pdf"), (HASH_2, "b.pdf")]).await;
        let mut store = MemoryStore::new(vec![
            record(json!({
                "content_hash": HASH_BY,
                "publisher:type": "parliament",
                "legislative_term": 0,
                "title": "zero"
            })),
            record(json!({
                "content_hash": HASH_2,
                "publisher:type": "parliament",
                "legislative_term": false,
                "title": "false"
            })),
        ]);

        let stats = f
            .importer
            .import_dataset(&dataset("by"), &f.archive, &mut store)
            .await
            .unwrap();

        assert_eq!(stats.ineligible, 2);
        assert_eq!(stats.imported, 0);
        assert!(f.backend.ingests().is_empty());
        assert!(store.saved.is_empty());
    }

    #[tokio::test]
    async fn failed_upload_leaves_record_pending() {
        let mut f = fixture(&[(HASH_BY, "a.pdf")]).await;
        let mut store =
            MemoryStore::new(vec![record(json!({"content_hash": HASH_BY, "title": "A"}))]);
        // folder path is skipped (no term), so the first ingest is the upload
        f.backend.fail_next_ingest(ApiError::Status {
            status: 400,
            message: "rejected".into(),
        });

        let stats = f
            .importer
            .import_dataset(&dataset("by"), &f.archive, &mut store)
            .await
            .unwrap();

        assert_eq!(stats.failed_uploads, 1);
        assert!(store.saved.is_empty());
        assert!(!store.records[0].is_imported());
        assert_eq!(temp_files(&f.importer), 0);
    }

    #[tokio::test]
    async fn folder_failure_uploads_without_parent() {
        let mut f = fixture(&[(HASH_BY, "a.pdf")]).await;
        let mut store = MemoryStore::new(vec![record(json!({
            "content_hash": HASH_BY,
            "legislative_term": 19,
            "title": "A"
        }))]);
        f.backend.fail_next_ingest(ApiError::Status {
            status: 400,
            message: "bad folder".into(),
        });

        let stats = f
            .importer
            .import_dataset(&dataset("by"), &f.archive, &mut store)
            .await
            .unwrap();

        assert_eq!(stats.imported, 1);
        let documents = f.backend.documents();
        assert_eq!(documents.len(), 1);
        assert!(documents[0].metadata.get("parent").is_none());
    }

    #[tokio::test]
    async fn save_failure_is_logged_not_fatal() {
        let mut f = fixture(&[(HASH_BY, "a.pdf"), (HASH_2, "b.pdf")]).await;
        let mut store = MemoryStore::new(vec![
            record(json!({"content_hash": HASH_BY, "legislative_term": 19, "title": "A"})),
            record(json!({"content_hash": HASH_2, "legislative_term": 19, "title": "B"})),
        ]);
        store.fail_saves = true;

        let stats = f
            .importer
            .import_dataset(&dataset("by"), &f.archive, &mut store)
            .await
            .unwrap();

        assert_eq!(stats.imported, 2);
        assert_eq!(stats.unsaved, 2);
        assert_eq!(f.backend.documents().len(), 2);
    }

    #[tokio::test]
    async fn folders_are_reused_across_records() {
        let mut f = fixture(&[(HASH_BY, "a.pdf"), (HASH_2, "b.pdf")]).await;
        let mut store = MemoryStore::new(vec![
            record(json!({"content_hash": HASH_BY, "legislative_term": 19, "title": "A"})),
            record(json!({"content_hash": HASH_2, "legislative_term": 19, "title": "B"})),
        ]);

        f.importer
            .import_dataset(&dataset("by"), &f.archive, &mut store)
            .await
            .unwrap();

        assert_eq!(f.backend.folders().len(), 3);
        assert_eq!(f.backend.documents().len(), 2);
    }

    #[tokio::test]
    async fn run_imports_catalog_dataset_end_to_end() {
        let archive_dir = tempfile::tempdir().unwrap();
        let file_dir = archive_dir.path().join("ab/c1/23").join(HASH_BY);
        std::fs::create_dir_all(&file_dir).unwrap();
        std::fs::write(file_dir.join("drs.pdf"), "pdf").unwrap();

        let metadata_root = tempfile::tempdir().unwrap();
        let dataset_dir = metadata_root.path().join("by");
        std::fs::create_dir_all(&dataset_dir).unwrap();
        std::fs::write(
            dataset_dir.join("drs.json"),
            json!({"content_hash": HASH_BY, "legislative_term": 19, "title": "A"}).to_string(),
        )
        .unwrap();

        let mut server = mockito::Server::new_async().await;
        let catalog = json!({
            "datasets": [
                {
                    "name": "by",
                    "title": "Bayern",
                    "publisher": {"name": "Bayerischer Landtag", "country": "de"},
                    "resources": [{
                        "url": format!("{}/by/archive.json", server.url()),
                        "mime_type": "application/json+archive"
                    }]
                },
                {"name": "sn", "resources": []},
                {
                    "name": "no_archive",
                    "resources": [{"url": "https://example.org/x.csv", "mime_type": "text/csv"}]
                }
            ]
        });
        server
            .mock("GET", "/catalog.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(catalog.to_string())
            .create_async()
            .await;
        server
            .mock("GET", "/by/archive.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({"archive_type": "file", "path": archive_dir.path()}).to_string())
            .create_async()
            .await;

        let config = ImportConfig {
            catalog_url: format!("{}/catalog.json", server.url()),
            metadata_root: metadata_root.path().to_path_buf(),
            ..ImportConfig::default()
        };
        let backend = Arc::new(FakeBackend::new());
        let mut importer = Importer::new(config, backend.clone()).unwrap();

        let stats = importer.run(None).await.unwrap();
        assert_eq!(stats.datasets, 1);
        assert_eq!(stats.datasets_skipped, 2);
        assert_eq!(stats.imported, 1);
        assert_eq!(backend.documents().len(), 1);
        assert!(dataset_dir.join("_mmmeta/state.db").exists());

        // second run finds the record already imported
        let stats = importer.run(Some("by")).await.unwrap();
        assert_eq!(stats.already_imported, 1);
        assert_eq!(backend.documents().len(), 1);
    }

    #[tokio::test]
    async fn run_with_dataset_filter_skips_other_datasets() {
        let archive_dir = tempfile::tempdir().unwrap();
        let metadata_root = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(metadata_root.path().join("by")).unwrap();

        let mut server = mockito::Server::new_async().await;
        let archive_resource = |name: &str| {
            json!([{
                "url": format!("{}/{}/archive.json", server.url(), name),
                "mime_type": "application/json+archive"
            }])
        };
        let catalog = json!({
            "datasets": [
                {"name": "sn", "resources": archive_resource("sn")},
                {"name": "by", "resources": archive_resource("by")}
            ]
        });
        server
            .mock("GET", "/catalog.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(catalog.to_string())
            .create_async()
            .await;
        let by_manifest = server
            .mock("GET", "/by/archive.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({"archive_type": "file", "path": archive_dir.path()}).to_string())
            .expect(1)
            .create_async()
            .await;
        let sn_manifest = server
            .mock("GET", "/sn/archive.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({"archive_type": "file", "path": archive_dir.path()}).to_string())
            .expect(0)
            .create_async()
            .await;

        let config = ImportConfig {
            catalog_url: format!("{}/catalog.json", server.url()),
            metadata_root: metadata_root.path().to_path_buf(),
            ..ImportConfig::default()
        };
        let backend = Arc::new(FakeBackend::new());
        let mut importer = Importer::new(config, backend.clone()).unwrap();

        let stats = importer.run(Some("by")).await.unwrap();
        assert_eq!(stats.datasets, 1);
        assert_eq!(stats.datasets_skipped, 0);

        by_manifest.assert_async().await;
        sn_manifest.assert_async().await;
        let lookups: Vec<_> = backend
            .collection_calls()
            .into_iter()
            .filter_map(|call| match call {
                CollectionCall::Lookup(foreign_id) => Some(foreign_id),
                _ => None,
            })
            .collect();
        assert_eq!(lookups, vec!["de_dokukratie_by".to_string()]);
        assert!(!metadata_root.path().join("sn").exists());
    }

    #[tokio::test]
    async fn missing_catalog_is_fatal() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/catalog.json")
            .with_status(500)
            .create_async()
            .await;

        let config = ImportConfig {
            catalog_url: format!("{}/catalog.json", server.url()),
            ..ImportConfig::default()
        };
        let mut importer = Importer::new(config, Arc::new(FakeBackend::new())).unwrap();
        let err = importer.run(None).await.unwrap_err();
        assert!(err.to_string().contains("Fetch catalog failed: 500"));
    }

    #[test]
    fn default_temp_dir_is_created_and_removed() {
        let importer =
            Importer::new(ImportConfig::default(), Arc::new(FakeBackend::new())).unwrap();
        let dir = importer.temp_dir().to_path_buf();
        assert!(dir.is_dir());
        drop(importer);
        assert!(!dir.exists());
    }
}
