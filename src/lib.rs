// src/lib.rs
// Public library surface for integration tests (and the two binaries).

pub mod announcements;
pub mod api;
pub mod config;
pub mod download;
pub mod error;
pub mod fetch;
pub mod metrics;
pub mod watermark;

// ---- Re-exports for stable public API ----
pub use crate::announcements::{filter_new, Announcement, BrowseType};
pub use crate::api::{create_router, AppState};
pub use crate::error::WatcherError;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the compact tracing subscriber shared by both binaries.
/// `RUST_LOG` wins; the default level is `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}
