// src/metrics.rs
use axum::{routing::get, Router};
use metrics::{describe_counter, describe_gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;

/// One-time metric registration (so series show up on /metrics).
pub fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!(
            "announce_checks_total",
            "Requests served by /announcements."
        );
        describe_counter!(
            "announce_events_total",
            "Records decoded from the remote document."
        );
        describe_counter!(
            "announce_new_total",
            "Display lines reported across all checks."
        );
        describe_counter!(
            "announce_errors_total",
            "Checks that failed on fetch, decode, or state."
        );
        describe_counter!(
            "download_success_total",
            "Asset files written by the downloader."
        );
        describe_counter!(
            "download_errors_total",
            "Per-URL download failures (skipped, not fatal)."
        );
        describe_gauge!("watermark_ts", "Unix ts the watermark last advanced to.");
        describe_gauge!(
            "download_last_run_ts",
            "Unix ts when the download batch last ran."
        );
    });
}

pub struct Metrics {
    pub handle: PrometheusHandle,
}

impl Metrics {
    /// Install the Prometheus recorder for this process.
    pub fn init() -> Self {
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .expect("prometheus: install recorder");

        ensure_metrics_described();
        Self { handle }
    }

    /// Returns a router exposing `/metrics` with the Prometheus exposition format.
    pub fn router(&self) -> Router {
        let handle = self.handle.clone();
        Router::new().route(
            "/metrics",
            get(move || {
                let h = handle.clone();
                async move { h.render() }
            }),
        )
    }
}
