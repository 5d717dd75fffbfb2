use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use songstream_api::{
    api::{create_router, AppState},
    config::Config,
    services::providers::{CatalogClient, CatalogSearch, ResolverClient},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    // Catalog construction may fail; the process still serves, with every
    // search-dependent endpoint answering 503.
    let catalog: Option<Arc<dyn CatalogSearch>> =
        match CatalogClient::new(config.catalog_api_url.clone()) {
            Ok(client) => Some(Arc::new(client)),
            Err(e) => {
                tracing::error!(error = %e, "catalog client initialization failed, search endpoints degraded");
                None
            }
        };

    let resolver = Arc::new(ResolverClient::new(
        config.resolver_api_url.clone(),
        config.resolver_fallback_url.clone(),
    )?);

    let state = AppState::new(catalog, resolver);
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "songstream-api listening");
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
