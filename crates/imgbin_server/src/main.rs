use anyhow::Result;
use clap::Parser;
use imgbin_error::{ServerError, ServerErrorKind, StoreErrorKind};
use imgbin_server::{AppState, ServerConfig, router};
use imgbin_store::{RecordStore, SharedStore};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "imgbin content-addressed image host", long_about = None)]
struct Args {
    /// File served as the landing page at /
    #[arg(short, long)]
    landing: Option<PathBuf>,

    /// Address to listen on (e.g. "0.0.0.0:8080")
    #[arg(short, long)]
    addr: Option<String>,

    /// Directory where uploaded images are stored
    #[arg(short, long)]
    image_dir: Option<PathBuf>,

    /// Path of the JSON snapshot file
    #[arg(short, long)]
    snapshot: Option<PathBuf>,
}

impl Args {
    /// Flags override environment values, which override defaults.
    fn into_config(self) -> ServerConfig {
        let mut config = ServerConfig::from_env();
        if let Some(landing) = self.landing {
            config.landing_page = landing;
        }
        if let Some(addr) = self.addr {
            config.listen_addr = addr;
        }
        if let Some(image_dir) = self.image_dir {
            config.image_dir = image_dir;
        }
        if let Some(snapshot) = self.snapshot {
            config.snapshot_path = snapshot;
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Args::parse().into_config();
    info!(
        landing = %config.landing_page.display(),
        addr = %config.listen_addr,
        image_dir = %config.image_dir.display(),
        snapshot = %config.snapshot_path.display(),
        "Starting imgbin"
    );

    let store = SharedStore::new(RecordStore::new(&config.snapshot_path));
    // Any load failure degrades to an empty index; only bind failure is fatal.
    if let Err(e) = store.load().await {
        match &e.kind {
            StoreErrorKind::SnapshotMissing(path) => {
                info!(path = %path, "No snapshot yet, starting empty");
            }
            _ => warn!(error = %e, "Failed to load snapshot, starting empty"),
        }
    }

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| {
            ServerError::new(ServerErrorKind::Bind {
                addr: config.listen_addr.clone(),
                source: e.to_string(),
            })
        })?;
    info!(addr = %config.listen_addr, "Listening");

    let app = router(AppState::new(store, config));
    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Serve(e.to_string())))?;

    Ok(())
}
