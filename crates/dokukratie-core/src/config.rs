//! Configuration module
//!
//! Importer settings are read from the environment (and an optional `.env`
//! file). The CLI overrides individual values with command-line flags.

use std::env;
use std::path::PathBuf;

use crate::constants::{ARCHIVE_MIME, CATALOG_URL, DEFAULT_FREQUENCY};
use crate::error::ImportError;

const RETRIES: u32 = 5;
const BACKOFF_BASE_MS: u64 = 1000;
const BACKOFF_MAX_MS: u64 = 60_000;
const HTTP_TIMEOUT_SECS: u64 = 120;

/// Import run configuration
#[derive(Clone, Debug)]
pub struct ImportConfig {
    pub catalog_url: String,
    pub archive_mime_type: String,
    // Document backend
    pub aleph_host: String,
    pub aleph_api_key: String,
    pub retries: u32,
    pub backoff_base_ms: u64,
    pub backoff_max_ms: u64,
    pub http_timeout_secs: u64,
    // Local state
    pub metadata_root: PathBuf,
    pub temp_dir: Option<PathBuf>,
    /// Frequency sent for datasets that don't declare one. `None` omits the field.
    pub default_frequency: Option<String>,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            catalog_url: CATALOG_URL.to_string(),
            archive_mime_type: ARCHIVE_MIME.to_string(),
            aleph_host: "http://localhost:8080".to_string(),
            aleph_api_key: String::new(),
            retries: RETRIES,
            backoff_base_ms: BACKOFF_BASE_MS,
            backoff_max_ms: BACKOFF_MAX_MS,
            http_timeout_secs: HTTP_TIMEOUT_SECS,
            metadata_root: PathBuf::from("data"),
            temp_dir: None,
            default_frequency: Some(DEFAULT_FREQUENCY.to_string()),
        }
    }
}

impl ImportConfig {
    pub fn from_env() -> Result<Self, ImportError> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let default_frequency = match env::var("DEFAULT_FREQUENCY") {
            Ok(value) if value.trim().is_empty() || value.eq_ignore_ascii_case("none") => None,
            Ok(value) => Some(value.trim().to_string()),
            Err(_) => defaults.default_frequency,
        };

        let config = ImportConfig {
            catalog_url: env::var("CATALOG_URL").unwrap_or(defaults.catalog_url),
            archive_mime_type: env::var("ARCHIVE_MIME_TYPE").unwrap_or(defaults.archive_mime_type),
            aleph_host: env::var("ALEPHCLIENT_HOST")
                .or_else(|_| env::var("ALEPH_HOST"))
                .unwrap_or(defaults.aleph_host),
            aleph_api_key: env::var("ALEPHCLIENT_API_KEY")
                .or_else(|_| env::var("ALEPH_API_KEY"))
                .unwrap_or_default(),
            retries: env::var("ALEPHCLIENT_RETRIES")
                .unwrap_or_else(|_| RETRIES.to_string())
                .parse()
                .map_err(|_| {
                    ImportError::Config("ALEPHCLIENT_RETRIES must be a valid number".to_string())
                })?,
            backoff_base_ms: env::var("BACKOFF_BASE_MS")
                .unwrap_or_else(|_| BACKOFF_BASE_MS.to_string())
                .parse()
                .unwrap_or(BACKOFF_BASE_MS),
            backoff_max_ms: env::var("BACKOFF_MAX_MS")
                .unwrap_or_else(|_| BACKOFF_MAX_MS.to_string())
                .parse()
                .unwrap_or(BACKOFF_MAX_MS),
            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .unwrap_or_else(|_| HTTP_TIMEOUT_SECS.to_string())
                .parse()
                .unwrap_or(HTTP_TIMEOUT_SECS),
            metadata_root: env::var("MMMETA")
                .or_else(|_| env::var("METADATA_ROOT"))
                .map(PathBuf::from)
                .unwrap_or(defaults.metadata_root),
            temp_dir: env::var("IMPORT_TEMP_DIR").ok().map(PathBuf::from),
            default_frequency,
        };

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ImportError> {
        if self.aleph_host.trim().is_empty() {
            return Err(ImportError::Config("ALEPHCLIENT_HOST must not be empty".to_string()));
        }
        if self.aleph_api_key.trim().is_empty() {
            return Err(ImportError::Config(
                "Missing API key. Set ALEPHCLIENT_API_KEY or ALEPH_API_KEY".to_string(),
            ));
        }
        if self.retries == 0 {
            return Err(ImportError::Config("ALEPHCLIENT_RETRIES must be at least 1".to_string()));
        }
        if self.backoff_base_ms > self.backoff_max_ms {
            return Err(ImportError::Config(format!(
                "BACKOFF_BASE_MS ({}) exceeds BACKOFF_MAX_MS ({})",
                self.backoff_base_ms, self.backoff_max_ms
            )));
        }
        Ok(())
    }

    /// Directory holding the metadata files and state database of one dataset.
    pub fn dataset_metadata_dir(&self, dataset: &str) -> PathBuf {
        self.metadata_root.join(dataset)
    }
}
