//! Hourly asset mirror — binary entrypoint.
//!
//! Creates the output directory, then sleeps to each hour boundary and
//! fetches every configured asset file to disk. A failed directory creation
//! is fatal; a failed URL is skipped.

use std::path::PathBuf;

use anyhow::Context;

use announce_watcher::download::{scheduler, DownloadClient};
use announce_watcher::metrics::ensure_metrics_described;
use announce_watcher::{config, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    init_tracing();
    ensure_metrics_described();

    let dir = PathBuf::from(config::download_dir());
    tokio::fs::create_dir_all(&dir)
        .await
        .with_context(|| format!("creating download dir {}", dir.display()))?;

    tracing::info!(
        dir = %dir.display(),
        urls = config::ASSET_URLS.len(),
        "asset downloader started"
    );

    let client = DownloadClient::http();
    scheduler::run(&client, config::ASSET_URLS, &dir).await;
    Ok(())
}
