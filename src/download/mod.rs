// src/download/mod.rs
pub mod scheduler;

use std::collections::HashMap;
use std::path::Path;

use metrics::counter;
use tokio::{fs, io::AsyncWriteExt};

use crate::error::WatcherError;

/// Output filename for a URL: its final `/`-delimited path segment.
pub fn file_name(url: &str) -> &str {
    match url.rsplit_once('/') {
        Some((_, name)) => name,
        None => url,
    }
}

/// Fetches the configured asset files to disk, one file per URL.
///
/// HTTP mode streams each response body straight into its output file,
/// truncating any previous copy. Fixture mode serves canned bodies (or
/// canned failures) so tests run without a network.
pub struct DownloadClient {
    mode: Mode,
}

enum Mode {
    Fixture(HashMap<String, Option<String>>),
    Http(reqwest::Client),
}

impl DownloadClient {
    pub fn http() -> Self {
        Self {
            mode: Mode::Http(reqwest::Client::new()),
        }
    }

    /// Canned bodies keyed by URL; `None` simulates a failed fetch.
    pub fn from_fixture(bodies: HashMap<String, Option<String>>) -> Self {
        Self {
            mode: Mode::Fixture(bodies),
        }
    }

    async fn fetch_to(&self, url: &str, dest: &Path) -> Result<(), WatcherError> {
        match &self.mode {
            Mode::Fixture(bodies) => match bodies.get(url) {
                Some(Some(body)) => {
                    fs::write(dest, body).await?;
                    Ok(())
                }
                _ => Err(WatcherError::Status {
                    status: reqwest::StatusCode::NOT_FOUND,
                    url: url.to_string(),
                }),
            },
            Mode::Http(client) => {
                let mut resp = client.get(url).send().await?;
                let status = resp.status();
                if !status.is_success() {
                    return Err(WatcherError::Status {
                        status,
                        url: url.to_string(),
                    });
                }

                let mut file = fs::File::create(dest).await?;
                while let Some(chunk) = resp.chunk().await? {
                    file.write_all(&chunk).await?;
                }
                file.flush().await?;
                Ok(())
            }
        }
    }

    /// Run one batch over `urls` into `dir`. URLs are fully independent: a
    /// failure is logged and skipped, never aborting the rest of the batch.
    /// Returns how many files were written.
    pub async fn run_batch(&self, urls: &[&str], dir: &Path) -> usize {
        let mut written = 0usize;
        for url in urls.iter().copied() {
            let dest = dir.join(file_name(url));
            match self.fetch_to(url, &dest).await {
                Ok(()) => {
                    counter!("download_success_total").increment(1);
                    tracing::info!(url, dest = %dest.display(), "asset downloaded");
                    written += 1;
                }
                Err(e) => {
                    counter!("download_errors_total").increment(1);
                    tracing::warn!(url, error = %e, "asset download failed, skipping");
                }
            }
        }
        written
    }
}
