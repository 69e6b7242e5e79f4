use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use dokukratie_core::MetadataRecord;
use serde_json::{Map, Value};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Sqlite;
use walkdir::WalkDir;

use crate::store::{MetadataStore, StoreError, StoreResult};

/// Directory inside a dataset's metadata directory holding the state database.
pub const STATE_DIR: &str = "_mmmeta";
const STATE_DB: &str = "state.db";

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS files (
    key TEXT PRIMARY KEY,
    data TEXT NOT NULL,
    imported BOOLEAN NOT NULL DEFAULT 0,
    imported_at TEXT,
    updated_at TEXT NOT NULL
)
"#;

/// SQLite-backed metadata store for one dataset
///
/// Layout:
/// - `{base_dir}/**/*.json`: one metadata file per document, keyed by `content_hash`
/// - `{base_dir}/_mmmeta/state.db`: mirrored records and import flags
pub struct SqliteMetadataStore {
    pool: SqlitePool,
    base_dir: PathBuf,
}

impl SqliteMetadataStore {
    /// Open (or create) the state database of the dataset at `base_dir`.
    pub async fn open(base_dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let base_dir = base_dir.into();
        let state_dir = base_dir.join(STATE_DIR);
        tokio::fs::create_dir_all(&state_dir).await?;

        let options = SqliteConnectOptions::new()
            .filename(state_dir.join(STATE_DB))
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        sqlx::query(SCHEMA).execute(&pool).await?;

        Ok(Self { pool, base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Metadata files below the base directory, sorted, skipping the state dir.
    fn metadata_files(&self) -> StoreResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        let walker = WalkDir::new(&self.base_dir)
            .into_iter()
            .filter_entry(|e| e.file_name() != STATE_DIR);

        for entry in walker {
            let entry = entry.map_err(std::io::Error::from)?;
            let is_json = entry.path().extension().and_then(|e| e.to_str()) == Some("json");
            if entry.file_type().is_file() && is_json {
                files.push(entry.into_path());
            }
        }
        files.sort();
        Ok(files)
    }

    async fn read_record(path: &Path) -> StoreResult<Option<MetadataRecord>> {
        let raw = tokio::fs::read(path).await?;
        let value: Value =
            serde_json::from_slice(&raw).map_err(|e| StoreError::InvalidMetadata {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        Ok(MetadataRecord::from_value(value))
    }
}

#[async_trait]
impl MetadataStore for SqliteMetadataStore {
    #[tracing::instrument(skip(self), fields(db.table = "files", db.operation = "upsert"))]
    async fn refresh(&mut self) -> StoreResult<usize> {
        let files = self.metadata_files()?;
        let now = Utc::now().to_rfc3339();
        let mut seen = 0;

        let mut tx = self.pool.begin().await?;
        for path in files {
            let record = match Self::read_record(&path).await {
                Ok(Some(record)) => record,
                Ok(None) => {
                    tracing::debug!(
                        path = %path.display(),
                        "Skipping metadata without content hash"
                    );
                    continue;
                }
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Skipping unreadable metadata file"
                    );
                    continue;
                }
            };

            let data = Value::Object(record.data().clone()).to_string();
            sqlx::query(
                r#"
                INSERT INTO files (key, data, updated_at)
                VALUES (?1, ?2, ?3)
                ON CONFLICT(key) DO UPDATE
                SET data = excluded.data, updated_at = excluded.updated_at
                "#,
            )
            .bind(record.key())
            .bind(&data)
            .bind(&now)
            .execute(&mut *tx)
            .await?;
            seen += 1;
        }
        tx.commit().await?;

        tracing::info!(
            base_dir = %self.base_dir.display(),
            records = seen,
            "Metadata store refreshed"
        );
        Ok(seen)
    }

    #[tracing::instrument(skip(self), fields(db.table = "files", db.operation = "select"))]
    async fn records(&self) -> StoreResult<Vec<MetadataRecord>> {
        let rows = sqlx::query_as::<Sqlite, (String, String, bool)>(
            "SELECT key, data, imported FROM files ORDER BY key",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|(key, data, imported)| {
                let data: Map<String, Value> =
                    serde_json::from_str(&data).map_err(|e| StoreError::InvalidMetadata {
                        path: format!("{}#{}", STATE_DB, key),
                        message: e.to_string(),
                    })?;
                Ok(MetadataRecord::new(key, data).with_imported(imported))
            })
            .collect()
    }

    #[tracing::instrument(
        skip(self, record),
        fields(db.table = "files", db.operation = "update", db.record_id = %record.key())
    )]
    async fn save(&mut self, record: &MetadataRecord) -> StoreResult<()> {
        let now = Utc::now().to_rfc3339();
        let imported_at = record.is_imported().then(|| now.clone());
        let data = Value::Object(record.data().clone()).to_string();

        sqlx::query(
            r#"
            INSERT INTO files (key, data, imported, imported_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT(key) DO UPDATE SET
                data = excluded.data,
                imported = excluded.imported,
                imported_at = COALESCE(files.imported_at, excluded.imported_at),
                updated_at = excluded.updated_at
            "#,
        )
        .bind(record.key())
        .bind(&data)
        .bind(record.is_imported())
        .bind(imported_at)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
