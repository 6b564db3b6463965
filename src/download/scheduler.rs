// src/download/scheduler.rs
use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, FixedOffset, Timelike, Utc};
use metrics::gauge;

use crate::config;
use crate::download::DownloadClient;

/// Time remaining until the next top-of-hour in `now`'s timezone.
///
/// Zero exactly on the boundary, so a process started at minute 0 fires
/// immediately instead of waiting a full hour.
pub fn until_next_hour(now: DateTime<FixedOffset>) -> Duration {
    let into_hour = u64::from(now.minute()) * 60 + u64::from(now.second());
    let nanos = u64::from(now.nanosecond());
    if into_hour == 0 && nanos == 0 {
        return Duration::ZERO;
    }
    // checked_sub guards the leap-second case where chrono reports nanos >= 1s.
    Duration::from_secs(3600 - into_hour)
        .checked_sub(Duration::from_nanos(nanos))
        .unwrap_or(Duration::ZERO)
}

fn now_jst() -> DateTime<FixedOffset> {
    let offset = FixedOffset::east_opt(config::JST_OFFSET_SECS).expect("static offset in range");
    Utc::now().with_timezone(&offset)
}

/// Hour-aligned download loop: sleep until the next boundary, run one batch,
/// recompute. No scheduler state survives a restart; the loop simply resumes
/// from the current wall clock.
pub async fn run(client: &DownloadClient, urls: &[&str], dir: &Path) {
    loop {
        let wait = until_next_hour(now_jst());
        tracing::info!(secs = wait.as_secs(), "sleeping until next hour boundary");
        tokio::time::sleep(wait).await;

        let written = client.run_batch(urls, dir).await;
        gauge!("download_last_run_ts").set(Utc::now().timestamp() as f64);
        tracing::info!(written, total = urls.len(), "download batch finished");

        // Step past the boundary so the next computation targets the
        // following hour even when the batch returns within the same second.
        tokio::time::sleep(Duration::from_secs(1)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn jst(h: u32, m: u32, s: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(9 * 3600)
            .expect("offset")
            .with_ymd_and_hms(2026, 8, 6, h, m, s)
            .single()
            .expect("valid time")
    }

    #[test]
    fn zero_exactly_on_the_boundary() {
        assert_eq!(until_next_hour(jst(15, 0, 0)), Duration::ZERO);
    }

    #[test]
    fn half_past_waits_thirty_minutes() {
        assert_eq!(until_next_hour(jst(15, 30, 0)), Duration::from_secs(1800));
    }

    #[test]
    fn one_second_before_the_boundary() {
        assert_eq!(until_next_hour(jst(15, 59, 59)), Duration::from_secs(1));
    }

    #[test]
    fn wait_always_lands_on_a_boundary() {
        for (h, m, s) in [(0, 0, 1), (7, 13, 42), (23, 59, 59)] {
            let now = jst(h, m, s);
            let landed = now + chrono::Duration::from_std(until_next_hour(now)).expect("std");
            assert_eq!(landed.minute(), 0);
            assert_eq!(landed.second(), 0);
        }
    }
}
