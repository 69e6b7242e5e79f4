//! dokukratie-import: push dokukratie datasets into Aleph.
//!
//! Configuration comes from the environment (and `.env`), overridden by flags.
//! Exits non-zero when the catalog, a manifest, an archive or a metadata store
//! cannot be loaded; single document failures are only logged.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use dokukratie_api_client::AlephClient;
use dokukratie_cli::{init_tracing, ImportArgs};
use dokukratie_core::ImportConfig;
use dokukratie_services::Importer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let args = ImportArgs::parse();
    let mut config = ImportConfig::from_env().context("Failed to load configuration")?;
    args.apply(&mut config);
    config.validate()?;

    let client = AlephClient::from_config(&config).context("Failed to create Aleph client")?;
    tracing::info!(
        host = client.base_url(),
        retries = client.retries(),
        catalog = %config.catalog_url,
        "Starting import"
    );

    let mut importer = Importer::new(config, Arc::new(client))?;
    let stats = importer.run(args.dataset.as_deref()).await?;

    tracing::info!(
        imported = stats.imported,
        failed_uploads = stats.failed_uploads,
        "Import finished"
    );
    Ok(())
}
