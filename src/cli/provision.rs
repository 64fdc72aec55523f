//! CLI entry-point for provisioning the Cosmos DB database and container.

use anyhow::{Context, Result};
use tracing::{info, instrument};

use crate::{config::Settings, store::CosmosStore};

#[instrument(skip(settings))]
pub async fn run(settings: Settings) -> Result<()> {
    let store = CosmosStore::connect(&settings.cosmos)
        .await
        .context("provisioning cosmos database")?;
    info!(
        database = store.database(),
        container = store.container(),
        throughput = settings.cosmos.throughput,
        "cosmos resources ready"
    );
    Ok(())
}
