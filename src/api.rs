// src/api.rs
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use chrono::Utc;
use metrics::{counter, gauge};
use tower_http::cors::CorsLayer;

use crate::announcements::filter_new;
use crate::config;
use crate::error::WatcherError;
use crate::fetch::AnnouncementSource;
use crate::metrics::ensure_metrics_described;
use crate::watermark::WatermarkStore;

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<AnnouncementSource>,
    pub store: Arc<WatermarkStore>,
}

pub fn create_router(state: AppState) -> Router {
    ensure_metrics_described();

    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/announcements", get(announcements))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

/// `WatcherError` rendered as a plain-text 500 carrying the upstream failure
/// message; no partial output.
struct ApiError(WatcherError);

impl From<WatcherError> for ApiError {
    fn from(e: WatcherError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        counter!("announce_errors_total").increment(1);
        tracing::warn!(error = %self.0, "announcement check failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("エラー: {}", self.0),
        )
            .into_response()
    }
}

/// One incremental check: load the watermark, fetch the remote document,
/// report everything published inside `[watermark, now]`. The watermark
/// advances to `now` only when the window produced output, so an empty run
/// reconsiders the same window next time.
async fn announcements(State(state): State<AppState>) -> Result<String, ApiError> {
    counter!("announce_checks_total").increment(1);

    let now = Utc::now().timestamp();
    let watermark = state.store.load(now).await?;
    let records = state.source.fetch_document().await?;

    let lines = filter_new(&records, watermark, now);
    if lines.is_empty() {
        tracing::debug!(watermark, "no announcements in window");
        return Ok(format!("{}\n", config::NO_UPDATES_SENTINEL));
    }

    let stored = state.store.advance(now).await?;
    counter!("announce_new_total").increment(lines.len() as u64);
    gauge!("watermark_ts").set(stored as f64);
    tracing::info!(
        count = lines.len(),
        watermark = stored,
        "new announcements reported"
    );

    Ok(lines.join("\n") + "\n")
}
