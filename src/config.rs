// src/config.rs
//! Compile-time defaults for URLs, paths, and listen address.
//!
//! Each value can be overridden through an environment variable so container
//! deployments stay configurable without flags; `.env` is loaded at startup.

/// Remote document listing published announcements.
pub const DATA_URL: &str =
    "https://raw.githubusercontent.com/Sekai-World/sekai-master-db-diff/main/userInformations.json";

/// Plain-text file holding the last successful check time (unix seconds).
pub const WATERMARK_PATH: &str = "state/last_check.txt";

/// Address the announcement endpoint listens on.
pub const BIND_ADDR: &str = "0.0.0.0:5000";

/// Asset files mirrored by the downloader, one output file per URL.
pub const ASSET_URLS: &[&str] = &[
    "https://raw.githubusercontent.com/Sekai-World/sekai-master-db-diff/refs/heads/main/musics.json",
    "https://raw.githubusercontent.com/Sekai-World/sekai-master-db-diff/refs/heads/main/musicDifficulties.json",
];

/// Directory the downloader writes into, created at startup.
pub const DOWNLOAD_DIR: &str = "data/downloads";

/// Body returned when no announcement falls inside the check window.
pub const NO_UPDATES_SENTINEL: &str = "新しいお知らせはありません。";

/// Announcements are published on JST wall-clock hours; batch alignment
/// follows the same offset.
pub const JST_OFFSET_SECS: i32 = 9 * 3600;

pub fn data_url() -> String {
    std::env::var("ANNOUNCE_DATA_URL").unwrap_or_else(|_| DATA_URL.to_string())
}

pub fn watermark_path() -> String {
    std::env::var("ANNOUNCE_STATE_PATH").unwrap_or_else(|_| WATERMARK_PATH.to_string())
}

pub fn bind_addr() -> String {
    std::env::var("ANNOUNCE_BIND_ADDR").unwrap_or_else(|_| BIND_ADDR.to_string())
}

pub fn download_dir() -> String {
    std::env::var("ASSET_DOWNLOAD_DIR").unwrap_or_else(|_| DOWNLOAD_DIR.to_string())
}
