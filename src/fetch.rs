// src/fetch.rs
use metrics::counter;

use crate::announcements::Announcement;
use crate::error::WatcherError;

/// Source of the remote announcement document.
///
/// HTTP mode performs one plain GET per call: no retries, no caching, no
/// conditional requests. Fixture mode serves an in-memory document so tests
/// and demos run without a network.
pub struct AnnouncementSource {
    mode: Mode,
}

enum Mode {
    Fixture(String),
    Http {
        url: String,
        client: reqwest::Client,
    },
}

impl AnnouncementSource {
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            mode: Mode::Http {
                url: url.into(),
                client: reqwest::Client::new(),
            },
        }
    }

    pub fn from_fixture(json: &str) -> Self {
        Self {
            mode: Mode::Fixture(json.to_string()),
        }
    }

    pub async fn fetch_document(&self) -> Result<Vec<Announcement>, WatcherError> {
        let records: Vec<Announcement> = match &self.mode {
            Mode::Fixture(s) => serde_json::from_str(s)?,
            Mode::Http { url, client } => {
                let resp = client.get(url).send().await?;
                let status = resp.status();
                if !status.is_success() {
                    return Err(WatcherError::Status {
                        status,
                        url: url.clone(),
                    });
                }
                let body = resp.text().await?;
                serde_json::from_str(&body)?
            }
        };

        counter!("announce_events_total").increment(records.len() as u64);
        Ok(records)
    }
}
