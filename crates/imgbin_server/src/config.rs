//! Server configuration.

use std::path::PathBuf;

/// Configuration for the imgbin server.
///
/// All values have defaults matching the original deployment; nothing is
/// validated beyond existence checks at use time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServerConfig {
    /// File served as the landing page at `/`
    pub landing_page: PathBuf,
    /// Address the server listens on
    pub listen_addr: String,
    /// Directory where uploaded image bytes are stored
    pub image_dir: PathBuf,
    /// Path of the JSON snapshot file
    pub snapshot_path: PathBuf,
}

impl ServerConfig {
    /// Create a configuration with the default values.
    pub fn new() -> Self {
        Self {
            landing_page: PathBuf::from("index.html"),
            listen_addr: "0.0.0.0:8080".to_string(),
            image_dir: PathBuf::from("images"),
            snapshot_path: PathBuf::from("log.json"),
        }
    }

    /// Create config from environment variables.
    ///
    /// Reads, each optional:
    /// - `IMGBIN_LANDING_PAGE` (default: "index.html")
    /// - `IMGBIN_LISTEN_ADDR` (default: "0.0.0.0:8080")
    /// - `IMGBIN_IMAGE_DIR` (default: "images")
    /// - `IMGBIN_SNAPSHOT_PATH` (default: "log.json")
    pub fn from_env() -> Self {
        let defaults = Self::new();
        Self {
            landing_page: std::env::var("IMGBIN_LANDING_PAGE")
                .map(PathBuf::from)
                .unwrap_or(defaults.landing_page),
            listen_addr: std::env::var("IMGBIN_LISTEN_ADDR").unwrap_or(defaults.listen_addr),
            image_dir: std::env::var("IMGBIN_IMAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.image_dir),
            snapshot_path: std::env::var("IMGBIN_SNAPSHOT_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.snapshot_path),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new()
    }
}
