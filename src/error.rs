// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Failure taxonomy shared by the announcement endpoint and the downloader.
///
/// The watcher surfaces every variant as an HTTP 500; the downloader logs
/// per-URL failures and moves on to the next target.
#[derive(Debug, Error)]
pub enum WatcherError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected status {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("watermark file {} holds non-numeric content {raw:?}", .path.display())]
    CorruptWatermark { path: PathBuf, raw: String },
}
