//! Single-writer handle shared across request tasks.

use crate::{RecordStore, save_image};
use imgbin_core::{Record, Upload};
use imgbin_error::{StoreError, StoreErrorKind};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Outcome of offering an upload to the store.
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    /// The content was new; the record now sits in the index.
    Added(Record),
    /// The content was already indexed under this id.
    Duplicate(String),
}

/// Mutex-guarded record store shared by all request handlers.
///
/// Every handler mutation goes through this handle, so the insert, image
/// write, and snapshot persist for one upload run as a unit. Two concurrent
/// uploads can no longer interleave their snapshot writes and silently drop
/// an index entry.
#[derive(Debug, Clone)]
pub struct SharedStore {
    inner: Arc<Mutex<RecordStore>>,
}

impl SharedStore {
    /// Wrap a record store for shared use.
    pub fn new(store: RecordStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Populate the index from the snapshot file.
    ///
    /// # Errors
    ///
    /// Passes through [`RecordStore::load`] failures; `SnapshotMissing` is
    /// expected on first run and the caller starts empty.
    pub async fn load(&self) -> Result<(), StoreError> {
        self.inner.lock().await.load().await
    }

    /// Offer an upload to the store.
    ///
    /// Under one lock guard: reject duplicates, write the image bytes, insert
    /// the record, persist the snapshot. Image and snapshot write failures
    /// after the duplicate check are logged and degrade rather than failing
    /// the upload; the record stays in the index either way, with its `saved`
    /// flag reflecting what actually reached disk.
    #[tracing::instrument(skip(self, upload), fields(id = %upload.record.id, name = %upload.record.name))]
    pub async fn add_upload(&self, upload: Upload) -> AddOutcome {
        let Upload { mut record, bytes } = upload;
        let mut store = self.inner.lock().await;

        if let Some(existing) = store.get(&record.id) {
            tracing::info!(id = %existing.id, name = %record.name, "Duplicate upload");
            return AddOutcome::Duplicate(existing.id.clone());
        }

        if let Err(e) = save_image(&mut record, &bytes).await {
            tracing::warn!(error = %e, name = %record.name, "Failed to save image");
        }

        match store.insert(record.clone()) {
            Ok(()) => {}
            // Unreachable while we hold the lock; surfaced rather than silently dropped.
            Err(StoreError {
                kind: StoreErrorKind::Duplicate { id },
                ..
            }) => return AddOutcome::Duplicate(id),
            Err(e) => tracing::warn!(error = %e, "Failed to index record"),
        }

        if let Err(e) = store.persist().await {
            tracing::warn!(error = %e, "Failed to persist snapshot");
        }

        AddOutcome::Added(record)
    }

    /// Look up a record by content id.
    pub async fn get(&self, id: &str) -> Option<Record> {
        self.inner.lock().await.get(id).cloned()
    }

    /// Number of records currently indexed.
    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }
}
