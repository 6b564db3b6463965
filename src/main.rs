//! Announcement watcher — binary entrypoint.
//! Boots the Axum HTTP server, wiring routes, shared state, and middleware.

use std::sync::Arc;

use anyhow::Context;

use announce_watcher::api::{create_router, AppState};
use announce_watcher::fetch::AnnouncementSource;
use announce_watcher::metrics::Metrics;
use announce_watcher::watermark::WatermarkStore;
use announce_watcher::{config, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();
    init_tracing();

    let metrics = Metrics::init();

    let state = AppState {
        source: Arc::new(AnnouncementSource::from_url(config::data_url())),
        store: Arc::new(WatermarkStore::new(config::watermark_path())),
    };
    let router = create_router(state).merge(metrics.router());

    let addr = config::bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!(%addr, "announcement watcher listening");

    axum::serve(listener, router).await.context("serving http")?;
    Ok(())
}
