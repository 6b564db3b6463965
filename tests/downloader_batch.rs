// tests/downloader_batch.rs
use std::collections::HashMap;

use announce_watcher::download::{file_name, DownloadClient};

#[tokio::test]
async fn failing_url_is_skipped_and_the_rest_still_written() {
    let tmp = tempfile::tempdir().expect("tempdir");

    let mut bodies = HashMap::new();
    bodies.insert("https://example.com/data/musics.json".to_string(), None);
    bodies.insert(
        "https://example.com/data/musicDifficulties.json".to_string(),
        Some(r#"[{"id":1}]"#.to_string()),
    );
    let client = DownloadClient::from_fixture(bodies);

    let urls = [
        "https://example.com/data/musics.json",
        "https://example.com/data/musicDifficulties.json",
    ];
    let written = client.run_batch(&urls, tmp.path()).await;
    assert_eq!(written, 1, "one of two targets succeeds");

    let ok = std::fs::read_to_string(tmp.path().join("musicDifficulties.json")).expect("written");
    assert_eq!(ok, r#"[{"id":1}]"#);
    assert!(
        !tmp.path().join("musics.json").exists(),
        "failed target leaves no file"
    );
}

#[tokio::test]
async fn repeated_batch_overwrites_previous_content() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let url = "https://example.com/data/musics.json";

    let first = DownloadClient::from_fixture(HashMap::from([(
        url.to_string(),
        Some("old content that is quite long".to_string()),
    )]));
    assert_eq!(first.run_batch(&[url], tmp.path()).await, 1);

    let second = DownloadClient::from_fixture(HashMap::from([(
        url.to_string(),
        Some("new".to_string()),
    )]));
    assert_eq!(second.run_batch(&[url], tmp.path()).await, 1);

    let body = std::fs::read_to_string(tmp.path().join("musics.json")).expect("read");
    assert_eq!(body, "new", "file must be truncated, not appended");
}

#[tokio::test]
async fn all_urls_failing_still_returns_without_error() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let client = DownloadClient::from_fixture(HashMap::new());

    let urls = ["https://example.com/a.json", "https://example.com/b.json"];
    assert_eq!(client.run_batch(&urls, tmp.path()).await, 0);
}

#[test]
fn file_name_matches_configured_targets() {
    assert_eq!(
        file_name("https://example.com/refs/heads/main/musicDifficulties.json"),
        "musicDifficulties.json"
    );
}
