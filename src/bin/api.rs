use anyhow::Context;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use blogsum::{
    app_state::AppState,
    config::{Config, LogFormat},
    fetcher::HttpFetcher,
    generation::{GeminiBackend, GenerativeBackend, Summarizer, Translator},
    pipeline::Pipeline,
    repositories::{PgSummaryStore, SummaryStore},
    router::build_router,
};

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        return;
    }
    info!("shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;
    init_tracing(config.log_format());

    let store = PgSummaryStore::connect(config.database_url())
        .await
        .context("Failed to connect to database")?;
    store.migrate().await.context("Failed to run migrations")?;
    let store = Arc::new(store);

    let backend: Arc<dyn GenerativeBackend> = Arc::new(
        GeminiBackend::new(
            config.gemini_base_url(),
            config.gemini_model(),
            config.gemini_api_key(),
        )
        .context("Failed to build generative backend")?,
    );

    let pipeline = Pipeline::new(
        Arc::new(HttpFetcher::new(config.fetch_timeout())),
        Summarizer::new(backend.clone()),
        Translator::new(backend),
        store.clone(),
    );
    let state = AppState::new(
        pipeline,
        store.clone() as Arc<dyn SummaryStore>,
        !config.is_production(),
    );

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr()))?;
    info!(addr = %config.bind_addr(), "listening");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    info!("store closed");
    Ok(())
}
