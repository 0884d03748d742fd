//! Error types for the imgbin workspace.
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use imgbin_error::{ImgbinResult, ConfigError};
//!
//! fn read_settings() -> ImgbinResult<String> {
//!     Err(ConfigError::new("listen address not set"))?
//! }
//!
//! match read_settings() {
//!     Ok(addr) => println!("listening on {}", addr),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod image;
mod server;
mod store;

pub use config::ConfigError;
pub use error::{ImgbinError, ImgbinErrorKind, ImgbinResult};
pub use image::{ImageError, ImageErrorKind};
pub use server::{ServerError, ServerErrorKind};
pub use store::{StoreError, StoreErrorKind};
