//! Core types for the imgbin image host.
//!
//! This crate defines the durable [`Record`] describing one stored image and
//! the transient [`Upload`] that pairs a candidate record with the raw bytes
//! still in flight. Records are keyed by a content id: the SHA-256 digest of
//! the image bytes, URL-safe base64 encoded, so identical uploads always
//! collapse to the same key.
//!
//! # Example
//!
//! ```
//! use imgbin_core::Upload;
//!
//! let upload = Upload::new("logo.png", b"\x89PNG\r\n\x1a\nrest".to_vec(), "/var/imgbin/images");
//! assert_eq!(upload.record.format, "png");
//! assert!(!upload.record.saved);
//! assert_eq!(upload.record.id, imgbin_core::content_id(&upload.bytes));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod format;
mod hash;
mod record;

pub use format::detect_format;
pub use hash::content_id;
pub use record::{Record, Upload};
