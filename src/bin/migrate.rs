use anyhow::Context;
use tracing_subscriber::EnvFilter;

use blogsum::{config::Config, repositories::PgSummaryStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    let store = PgSummaryStore::connect(config.database_url())
        .await
        .context("Failed to connect to database")?;

    // runs all pending migrations; no-op if up-to-date
    store.migrate().await?;
    tracing::info!("migrations applied");

    store.close().await;
    Ok(())
}
