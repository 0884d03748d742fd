//! Record and upload types.

use crate::{content_id, detect_format};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Metadata describing one stored image.
///
/// This is the durable half of an upload: everything here round-trips through
/// the JSON snapshot. The raw bytes never do; they live on [`Upload`] until
/// written to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Content id of the image bytes, unique by construction
    pub id: String,
    /// Original filename as supplied by the uploader
    pub name: String,
    /// Detected image format tag, empty when detection failed
    pub format: String,
    /// On-disk location of the image bytes
    pub path: PathBuf,
    /// Timestamp of first successful upload
    pub added: DateTime<Utc>,
    /// True once the bytes have been durably written to `path`
    pub saved: bool,
}

impl Record {
    /// Build a candidate record for freshly uploaded bytes.
    ///
    /// The id is derived from the content, the format sniffed from the magic
    /// bytes, and the path from `{image_dir}/{name}`. Two uploads sharing an
    /// original filename therefore share a path; the later write wins.
    pub fn new(name: impl Into<String>, data: &[u8], image_dir: impl AsRef<Path>) -> Self {
        let name = name.into();
        Self {
            id: content_id(data),
            format: detect_format(data),
            path: image_dir.as_ref().join(&name),
            added: Utc::now(),
            saved: false,
            name,
        }
    }
}

/// An in-flight upload: a candidate record plus the raw bytes.
///
/// Keeping the bytes on a separate type makes their exclusion from the
/// snapshot a property of the data model rather than of the encoder.
#[derive(Debug, Clone, PartialEq)]
pub struct Upload {
    /// Candidate record, `saved` still false
    pub record: Record,
    /// Raw image bytes held until the save step
    pub bytes: Vec<u8>,
}

impl Upload {
    /// Build an upload from a filename and its bytes.
    pub fn new(name: impl Into<String>, bytes: Vec<u8>, image_dir: impl AsRef<Path>) -> Self {
        let record = Record::new(name, &bytes, image_dir);
        Self { record, bytes }
    }
}
