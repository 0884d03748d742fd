//! Record store error types.

/// Kinds of record store errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StoreErrorKind {
    /// Snapshot file does not exist (expected on first run)
    #[display("Snapshot not found: {}", _0)]
    SnapshotMissing(String),
    /// Snapshot file exists but is not valid serialized record data
    #[display("Failed to parse snapshot: {}", _0)]
    SnapshotParse(String),
    /// Failed to read the snapshot file for a reason other than absence
    #[display("Failed to read snapshot: {}", _0)]
    SnapshotRead(String),
    /// Failed to write the snapshot file
    #[display("Failed to write snapshot: {}", _0)]
    SnapshotWrite(String),
    /// Content hash already present in the store.
    ///
    /// Carries the existing record's id so callers can redirect to it.
    #[display("Content already indexed as '{}'", id)]
    Duplicate {
        /// Id of the record already holding this content
        id: String,
    },
}

/// Record store error with location tracking.
///
/// # Examples
///
/// ```
/// use imgbin_error::{StoreError, StoreErrorKind};
///
/// let err = StoreError::new(StoreErrorKind::SnapshotMissing("log.json".to_string()));
/// assert!(format!("{}", err).contains("not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Store Error: {} at line {} in {}", kind, line, file)]
pub struct StoreError {
    /// The kind of error that occurred
    pub kind: StoreErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StoreError {
    /// Create a new store error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StoreErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
