pub mod error;
pub mod handlers;

use crate::adapters::{FixtureSource, UpstreamClient};
use crate::config::GatewayConfig;
use crate::domain::ports::FileSource;
use crate::utils::error::Result;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn FileSource>,
    pub fixtures: FixtureSource,
    pub concurrent_requests: usize,
}

impl AppState {
    pub fn new(source: Arc<dyn FileSource>, concurrent_requests: usize) -> Self {
        Self {
            source,
            fixtures: FixtureSource::new(),
            concurrent_requests,
        }
    }

    /// Picks the upstream client, or the fixture source when configured.
    pub fn from_config(config: &GatewayConfig) -> Result<Self> {
        let source: Arc<dyn FileSource> = if config.use_fixtures {
            tracing::info!("Serving built-in fixture files");
            Arc::new(FixtureSource::new())
        } else {
            tracing::info!("Upstream: {}", config.upstream.base_url);
            Arc::new(UpstreamClient::new(&config.upstream)?)
        };

        Ok(Self::new(source, config.upstream.concurrent_requests))
    }
}

pub fn router(state: AppState) -> Router {
    let mocked = Router::new()
        .route("/files", get(handlers::mocked_files))
        .route("/file/:name", get(handlers::mocked_file));

    Router::new()
        .route("/files", get(handlers::list_files))
        .route("/files/data", get(handlers::files_data))
        .route("/file/:name", get(handlers::get_file))
        .nest("/mocked", mocked)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn serve(state: AppState, addr: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server is running on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
