//! Tests for the record store, image persister, and shared handle.

use imgbin_core::{Record, Upload};
use imgbin_store::{
    AddOutcome, RecordStore, SharedStore, StoreErrorKind, read_image, save_image,
};
use imgbin_store::{ImageErrorKind, StoreError};
use tempfile::TempDir;

const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDRfake";
const GIF_BYTES: &[u8] = b"GIF89a\x01\x00\x01\x00different";

#[tokio::test]
async fn load_missing_snapshot_is_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = RecordStore::new(temp_dir.path().join("absent.json"));

    let err = store.load().await.unwrap_err();
    assert!(matches!(err.kind, StoreErrorKind::SnapshotMissing(_)));
    // Never an empty-but-successful load.
    assert!(store.is_empty());
}

#[tokio::test]
async fn load_rejects_corrupt_snapshot() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("log.json");
    tokio::fs::write(&path, b"{ not json").await.unwrap();

    let mut store = RecordStore::new(&path);
    let err = store.load().await.unwrap_err();
    assert!(matches!(err.kind, StoreErrorKind::SnapshotParse(_)));
    assert!(store.is_empty());
}

#[tokio::test]
async fn duplicate_content_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = RecordStore::new(temp_dir.path().join("log.json"));

    let first = Record::new("one.png", PNG_BYTES, temp_dir.path());
    let second = Record::new("other-name.png", PNG_BYTES, temp_dir.path());
    assert_eq!(first.id, second.id);

    store.insert(first.clone()).unwrap();
    let err = store.insert(second).unwrap_err();
    match err.kind {
        StoreErrorKind::Duplicate { id } => assert_eq!(id, first.id),
        other => panic!("expected Duplicate, got {other}"),
    }
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn distinct_content_coexists() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = RecordStore::new(temp_dir.path().join("log.json"));

    let png = Record::new("a.png", PNG_BYTES, temp_dir.path());
    let gif = Record::new("b.gif", GIF_BYTES, temp_dir.path());
    assert_ne!(png.id, gif.id);

    store.insert(png.clone()).unwrap();
    store.insert(gif.clone()).unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(store.get(&png.id), Some(&png));
    assert_eq!(store.get(&gif.id), Some(&gif));
}

#[tokio::test]
async fn snapshot_round_trips() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("log.json");

    let mut store = RecordStore::new(&path);
    store
        .insert(Record::new("a.png", PNG_BYTES, temp_dir.path()))
        .unwrap();
    store
        .insert(Record::new("b.gif", GIF_BYTES, temp_dir.path()))
        .unwrap();
    store.persist().await.unwrap();

    let mut reloaded = RecordStore::new(&path);
    reloaded.load().await.unwrap();
    assert_eq!(reloaded.records(), store.records());
}

#[tokio::test]
async fn persist_overwrites_previous_snapshot() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("log.json");

    let mut store = RecordStore::new(&path);
    store
        .insert(Record::new("a.png", PNG_BYTES, temp_dir.path()))
        .unwrap();
    store.persist().await.unwrap();
    store
        .insert(Record::new("b.gif", GIF_BYTES, temp_dir.path()))
        .unwrap();
    store.persist().await.unwrap();

    let mut reloaded = RecordStore::new(&path);
    reloaded.load().await.unwrap();
    assert_eq!(reloaded.len(), 2);
}

#[tokio::test]
async fn saved_flag_tracks_the_write() {
    let temp_dir = TempDir::new().unwrap();
    let mut record = Record::new("cat.png", PNG_BYTES, temp_dir.path().join("images"));
    assert!(!record.saved);

    save_image(&mut record, PNG_BYTES).await.unwrap();
    assert!(record.saved);
    assert_eq!(read_image(&record).await.unwrap(), PNG_BYTES);

    // Second save is a programming error and must not touch the file.
    let err = save_image(&mut record, b"other bytes").await.unwrap_err();
    assert!(matches!(err.kind, ImageErrorKind::AlreadySaved(_)));
    assert_eq!(read_image(&record).await.unwrap(), PNG_BYTES);
}

#[tokio::test]
async fn failed_save_leaves_flag_unset() {
    let temp_dir = TempDir::new().unwrap();
    // A regular file where the image directory should be.
    let blocker = temp_dir.path().join("images");
    tokio::fs::write(&blocker, b"in the way").await.unwrap();

    let mut record = Record::new("cat.png", PNG_BYTES, &blocker);
    let err = save_image(&mut record, PNG_BYTES).await.unwrap_err();
    assert!(matches!(err.kind, ImageErrorKind::DirectoryCreation(_)));
    assert!(!record.saved);
}

#[tokio::test]
async fn same_filename_overwrites_on_disk() {
    // Documented limitation: paths are {image_dir}/{original filename}, so two
    // different contents sharing a name collide and the later write wins.
    let temp_dir = TempDir::new().unwrap();
    let image_dir = temp_dir.path().join("images");

    let mut first = Record::new("shared.png", PNG_BYTES, &image_dir);
    let mut second = Record::new("shared.png", GIF_BYTES, &image_dir);
    assert_ne!(first.id, second.id);
    assert_eq!(first.path, second.path);

    save_image(&mut first, PNG_BYTES).await.unwrap();
    save_image(&mut second, GIF_BYTES).await.unwrap();

    assert_eq!(read_image(&first).await.unwrap(), GIF_BYTES);
}

#[tokio::test]
async fn read_missing_image_is_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let record = Record::new("ghost.png", PNG_BYTES, temp_dir.path());

    let err = read_image(&record).await.unwrap_err();
    assert!(matches!(err.kind, ImageErrorKind::NotFound(_)));
}

#[tokio::test]
async fn shared_store_adds_then_dedupes() {
    let temp_dir = TempDir::new().unwrap();
    let snapshot = temp_dir.path().join("log.json");
    let image_dir = temp_dir.path().join("images");
    let store = SharedStore::new(RecordStore::new(&snapshot));

    let upload = Upload::new("cat.png", PNG_BYTES.to_vec(), &image_dir);
    let record = match store.add_upload(upload).await {
        AddOutcome::Added(record) => record,
        AddOutcome::Duplicate(id) => panic!("fresh upload deduped as {id}"),
    };
    assert!(record.saved);
    assert!(record.path.exists());
    assert_eq!(store.len().await, 1);

    // Snapshot reflects the upload, saved flag included.
    let mut reloaded = RecordStore::new(&snapshot);
    reloaded.load().await.unwrap();
    assert!(reloaded.get(&record.id).unwrap().saved);

    // Byte-identical re-upload resolves to the existing record.
    let again = Upload::new("renamed.png", PNG_BYTES.to_vec(), &image_dir);
    assert_eq!(
        store.add_upload(again).await,
        AddOutcome::Duplicate(record.id.clone())
    );
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn shared_store_keeps_record_when_image_write_fails() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("images");
    tokio::fs::write(&blocker, b"in the way").await.unwrap();
    let store = SharedStore::new(RecordStore::new(temp_dir.path().join("log.json")));

    let upload = Upload::new("cat.png", PNG_BYTES.to_vec(), &blocker);
    match store.add_upload(upload).await {
        AddOutcome::Added(record) => {
            // Degraded, not dropped: indexed with saved still false.
            assert!(!record.saved);
            assert!(store.get(&record.id).await.is_some());
        }
        AddOutcome::Duplicate(id) => panic!("fresh upload deduped as {id}"),
    }
}

#[tokio::test]
async fn store_error_display_names_the_duplicate() {
    let err = StoreError::new(StoreErrorKind::Duplicate {
        id: "abc123".to_string(),
    });
    assert!(format!("{err}").contains("abc123"));
}
