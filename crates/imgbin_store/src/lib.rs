//! Content-addressed record store for the imgbin image host.
//!
//! The store is an in-memory map from content id to [`Record`], snapshotted
//! to a single JSON file after every accepted upload. Deduplication falls out
//! of the keying: identical bytes hash to the same id, so a second insert is
//! rejected rather than overwritten.
//!
//! Request handlers never touch [`RecordStore`] directly. They go through
//! [`SharedStore`], which serializes the insert, image write, and snapshot
//! persist behind one mutex so concurrent uploads cannot interleave their
//! snapshot writes.
//!
//! # Example
//!
//! ```rust
//! use imgbin_core::Upload;
//! use imgbin_store::{AddOutcome, RecordStore, SharedStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = SharedStore::new(RecordStore::new("/tmp/imgbin/log.json"));
//!
//! let upload = Upload::new("cat.png", b"\x89PNG\r\n\x1a\n...".to_vec(), "/tmp/imgbin/images");
//! match store.add_upload(upload).await {
//!     AddOutcome::Added(record) => println!("stored {}", record.id),
//!     AddOutcome::Duplicate(id) => println!("already had {}", id),
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod image;
mod shared;
mod store;

pub use image::{read_image, save_image};
pub use imgbin_error::{ImageError, ImageErrorKind, StoreError, StoreErrorKind};
pub use shared::{AddOutcome, SharedStore};
pub use store::RecordStore;
