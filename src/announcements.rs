// src/announcements.rs
use serde::Deserialize;

/// One entry of the remote announcement document. Transient: decoded on each
/// check, never retained.
#[derive(Debug, Clone, Deserialize)]
pub struct Announcement {
    pub title: String,
    /// Publication time in milliseconds since the unix epoch.
    #[serde(rename = "startAt")]
    pub start_at: i64,
    #[serde(rename = "browseType")]
    pub browse_type: BrowseType,
    #[serde(default)]
    pub path: String,
}

/// Link behavior of an announcement. Upstream occasionally ships values
/// beyond the two documented ones; those decode as `Other` and are dropped
/// at classification, not treated as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrowseType {
    Internal,
    External,
    #[serde(other)]
    Other,
}

fn display_line(a: &Announcement) -> Option<String> {
    match a.browse_type {
        BrowseType::Internal => Some(a.title.clone()),
        BrowseType::External => Some(format!("[{}]({})", a.title, a.path)),
        BrowseType::Other => None,
    }
}

/// Select announcements published inside `[watermark, now]` (unix seconds,
/// inclusive on both ends) and render one display line per match, preserving
/// input order.
///
/// `startAt` arrives in milliseconds; the division truncates toward zero,
/// which is exact for the positive timestamps upstream publishes.
pub fn filter_new(records: &[Announcement], watermark: i64, now: i64) -> Vec<String> {
    records
        .iter()
        .filter(|a| {
            let start_at_secs = a.start_at / 1000;
            watermark <= start_at_secs && start_at_secs <= now
        })
        .filter_map(display_line)
        .collect()
}
