//! In-memory record index with a JSON snapshot file.

use imgbin_core::Record;
use imgbin_error::{StoreError, StoreErrorKind};
use std::collections::HashMap;
use std::path::PathBuf;

/// Index of all stored images, keyed by content id.
///
/// The full map is serialized to a single JSON snapshot file. Persisting the
/// whole map after each accepted upload is the simplest correct strategy at
/// this scale: record counts are small and writes are one-per-upload.
///
/// The in-memory map and the on-disk snapshot may diverge between a mutation
/// and the next [`persist`](Self::persist) call; there is no write-ahead log.
#[derive(Debug)]
pub struct RecordStore {
    snapshot_path: PathBuf,
    records: HashMap<String, Record>,
}

impl RecordStore {
    /// Create an empty store backed by the given snapshot path.
    ///
    /// Does not touch the filesystem; call [`load`](Self::load) to populate
    /// from an existing snapshot.
    pub fn new(snapshot_path: impl Into<PathBuf>) -> Self {
        Self {
            snapshot_path: snapshot_path.into(),
            records: HashMap::new(),
        }
    }

    /// Insert a record under its content id.
    ///
    /// # Errors
    ///
    /// Returns `Duplicate` carrying the existing record's id when the content
    /// is already indexed; the store is left unmodified. Never writes to
    /// disk.
    pub fn insert(&mut self, record: Record) -> Result<(), StoreError> {
        if let Some(existing) = self.records.get(&record.id) {
            return Err(StoreError::new(StoreErrorKind::Duplicate {
                id: existing.id.clone(),
            }));
        }

        self.records.insert(record.id.clone(), record);
        Ok(())
    }

    /// Serialize the entire map to the snapshot path.
    ///
    /// Fully overwrites any previous snapshot, via a temp file and rename so
    /// a failed write cannot truncate the prior snapshot.
    ///
    /// # Errors
    ///
    /// Returns `SnapshotWrite` if serialization or either filesystem step
    /// fails; the prior on-disk snapshot remains in that case.
    #[tracing::instrument(skip(self), fields(path = %self.snapshot_path.display(), records = self.records.len()))]
    pub async fn persist(&self) -> Result<(), StoreError> {
        let json = serde_json::to_vec(&self.records).map_err(|e| {
            StoreError::new(StoreErrorKind::SnapshotWrite(format!(
                "{}: {}",
                self.snapshot_path.display(),
                e
            )))
        })?;

        let temp_path = self.snapshot_path.with_extension("tmp");
        tokio::fs::write(&temp_path, &json).await.map_err(|e| {
            StoreError::new(StoreErrorKind::SnapshotWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, &self.snapshot_path)
            .await
            .map_err(|e| {
                StoreError::new(StoreErrorKind::SnapshotWrite(format!(
                    "rename {} to {}: {}",
                    temp_path.display(),
                    self.snapshot_path.display(),
                    e
                )))
            })?;

        tracing::debug!(records = self.records.len(), "Persisted snapshot");
        Ok(())
    }

    /// Replace the in-memory map with the snapshot file's content.
    ///
    /// All-or-nothing: the map is only swapped once the whole file has
    /// deserialized.
    ///
    /// # Errors
    ///
    /// Returns `SnapshotMissing` when the file is absent (expected on first
    /// run; the caller starts empty), `SnapshotRead` on any other read
    /// failure, and `SnapshotParse` when the content is not a valid record
    /// map.
    #[tracing::instrument(skip(self), fields(path = %self.snapshot_path.display()))]
    pub async fn load(&mut self) -> Result<(), StoreError> {
        let bytes = tokio::fs::read(&self.snapshot_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StoreError::new(StoreErrorKind::SnapshotMissing(
                    self.snapshot_path.display().to_string(),
                ))
            } else {
                StoreError::new(StoreErrorKind::SnapshotRead(format!(
                    "{}: {}",
                    self.snapshot_path.display(),
                    e
                )))
            }
        })?;

        let records: HashMap<String, Record> = serde_json::from_slice(&bytes).map_err(|e| {
            StoreError::new(StoreErrorKind::SnapshotParse(format!(
                "{}: {}",
                self.snapshot_path.display(),
                e
            )))
        })?;

        tracing::info!(records = records.len(), "Loaded snapshot");
        self.records = records;
        Ok(())
    }

    /// Look up a record by content id.
    pub fn get(&self, id: &str) -> Option<&Record> {
        self.records.get(id)
    }

    /// Number of records in the index.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the index holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The full record map, for snapshot comparisons.
    pub fn records(&self) -> &HashMap<String, Record> {
        &self.records
    }
}
