//! HTTP surface for the imgbin image host.
//!
//! Three routes over the record store: `GET /` serves the landing page,
//! `POST /upload` accepts a multipart image upload and redirects to its
//! content-id URL, `GET /img/{id}` streams stored bytes back.
//!
//! Handlers never abort a request: failures are logged and the response
//! degrades to whatever can still be said to the caller. The one fatal
//! condition is failing to bind the listen address at startup.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod config;

pub use api::{AppState, router};
pub use config::ServerConfig;
