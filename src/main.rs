mod catalog;
mod config;
mod error;
mod generation;
mod models;
mod renderer;
mod routes;

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{fmt, EnvFilter};

use crate::{catalog::Catalog, config::AppConfig, renderer::PageRenderer, routes::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;

    // Init tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let catalog = Catalog::builtin().context("invalid built-in catalog")?;
    tracing::info!("📚 Loaded catalog with {} dance videos", catalog.list().len());

    let renderer = match config.renderer_url.as_deref() {
        Some(url) => {
            let renderer = PageRenderer::new(url).context("failed to build page renderer client")?;
            tracing::info!("Forwarding page requests to {}", renderer.base_url());
            Some(Arc::new(renderer))
        }
        None => None,
    };
    if renderer.is_none() {
        tracing::warn!("RENDERER_URL not set, non-API paths will answer 404");
    }

    let app = routes::router(AppState { catalog, renderer }, config.max_upload_bytes);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "Starting server");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("👋 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
}
