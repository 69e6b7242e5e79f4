//! Shared pieces of the importer binary: tracing setup and command-line
//! arguments.

use std::path::PathBuf;

use clap::Parser;
use dokukratie_core::ImportConfig;

/// Initialize tracing for the importer.
///
/// Filter from `RUST_LOG` (default `info`); `LOG_FORMAT=json` switches to
/// one JSON object per line.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[derive(Parser, Debug, Default)]
#[command(
    name = "dokukratie-import",
    about = "Import dokukratie datasets into an Aleph instance"
)]
pub struct ImportArgs {
    /// Only import this dataset (e.g. `by`, `sehrgutachten`)
    pub dataset: Option<String>,

    /// Dataset catalog URL
    #[arg(long, env = "CATALOG_URL")]
    pub catalog_url: Option<String>,

    /// MIME type of the archive resource in the catalog
    #[arg(long, env = "ARCHIVE_MIME_TYPE")]
    pub archive_mime_type: Option<String>,

    /// Aleph base URL
    #[arg(long, env = "ALEPHCLIENT_HOST")]
    pub host: Option<String>,

    /// Aleph API key
    #[arg(long, env = "ALEPHCLIENT_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Attempts per backend call, including the first
    #[arg(long, env = "ALEPHCLIENT_RETRIES")]
    pub retries: Option<u32>,

    #[arg(long, env = "BACKOFF_BASE_MS")]
    pub backoff_base_ms: Option<u64>,

    #[arg(long, env = "BACKOFF_MAX_MS")]
    pub backoff_max_ms: Option<u64>,

    /// HTTP timeout in seconds
    #[arg(long, env = "HTTP_TIMEOUT_SECS")]
    pub timeout: Option<u64>,

    /// Directory holding one metadata directory per dataset
    #[arg(long, env = "MMMETA")]
    pub metadata_root: Option<PathBuf>,

    /// Directory for materialized archive files (default: a scratch directory)
    #[arg(long, env = "IMPORT_TEMP_DIR")]
    pub temp_dir: Option<PathBuf>,

    /// Frequency of newly created collections; `none` to leave it unset
    #[arg(long)]
    pub default_frequency: Option<String>,
}

impl ImportArgs {
    /// Override `config` with every value given on the command line.
    pub fn apply(&self, config: &mut ImportConfig) {
        if let Some(url) = &self.catalog_url {
            config.catalog_url = url.clone();
        }
        if let Some(mime) = &self.archive_mime_type {
            config.archive_mime_type = mime.clone();
        }
        if let Some(host) = &self.host {
            config.aleph_host = host.clone();
        }
        if let Some(key) = &self.api_key {
            config.aleph_api_key = key.clone();
        }
        if let Some(retries) = self.retries {
            config.retries = retries;
        }
        if let Some(ms) = self.backoff_base_ms {
            config.backoff_base_ms = ms;
        }
        if let Some(ms) = self.backoff_max_ms {
            config.backoff_max_ms = ms;
        }
        if let Some(secs) = self.timeout {
            config.http_timeout_secs = secs;
        }
        if let Some(root) = &self.metadata_root {
            config.metadata_root = root.clone();
        }
        if let Some(dir) = &self.temp_dir {
            config.temp_dir = Some(dir.clone());
        }
        if let Some(frequency) = &self.default_frequency {
            config.default_frequency = match frequency.trim() {
                "" => None,
                f if f.eq_ignore_ascii_case("none") => None,
                f => Some(f.to_string()),
            };
        }
    }
}
