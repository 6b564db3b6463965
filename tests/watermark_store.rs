// tests/watermark_store.rs
use announce_watcher::watermark::WatermarkStore;
use announce_watcher::WatcherError;

#[tokio::test]
async fn absent_file_initializes_to_now_and_persists() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let store = WatermarkStore::new(tmp.path().join("state").join("last_check.txt"));

    let v = store.load(1_700_000_000).await.expect("first load");
    assert_eq!(v, 1_700_000_000);

    // Round-trip: a second load reads the persisted value back.
    let again = store.load(9_999_999_999).await.expect("second load");
    assert_eq!(again, 1_700_000_000);
}

#[tokio::test]
async fn save_then_load_round_trips() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let store = WatermarkStore::new(tmp.path().join("last_check.txt"));

    let stored = store.advance(1_234_567).await.expect("advance");
    assert_eq!(stored, 1_234_567);
    assert_eq!(store.load(0).await.expect("load"), 1_234_567);
}

#[tokio::test]
async fn advance_never_moves_backward() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let store = WatermarkStore::new(tmp.path().join("last_check.txt"));

    store.advance(2_000).await.expect("advance to 2000");
    let stored = store.advance(1_000).await.expect("advance to 1000");
    assert_eq!(stored, 2_000, "older value must not win");
    assert_eq!(store.load(0).await.expect("load"), 2_000);
}

#[tokio::test]
async fn corrupt_file_is_reported_not_reset() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = tmp.path().join("last_check.txt");
    std::fs::write(&path, "12x34").expect("seed corrupt file");

    let store = WatermarkStore::new(&path);
    let err = store.load(1_700_000_000).await.expect_err("must fail");
    assert!(matches!(err, WatcherError::CorruptWatermark { .. }));

    // The broken content stays on disk for inspection.
    assert_eq!(std::fs::read_to_string(&path).expect("read"), "12x34");
}

#[tokio::test]
async fn surrounding_whitespace_is_tolerated() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = tmp.path().join("last_check.txt");
    std::fs::write(&path, "  424242\n").expect("seed file");

    let store = WatermarkStore::new(&path);
    assert_eq!(store.load(0).await.expect("load"), 424_242);
}
