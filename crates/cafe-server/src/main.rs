//! Cafe Directory Server
//!
//! Server-rendered cafe and blog directory backed by a single JSON document.
//! Cafes can be added, edited and removed through HTML forms; every change is
//! written back to the document before the response is sent.

mod config;
mod handlers;
mod method_override;
mod routes;
mod services;
mod views;

use anyhow::{Context, Result};
use cafe_core::{CityCatalog, JsonFileStorage, RecordStore};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use services::UploadService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<RecordStore>>,
    pub catalog: Arc<CityCatalog>,
    pub uploads: Arc<UploadService>,
}

#[tokio::main]
async fn main() {
    install_panic_hook();

    // Initialize tracing
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("Starting Cafe Directory v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run_server().await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

/// Report panics in handler tasks through tracing, then run the default hook
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let message = info
            .payload()
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| info.payload().downcast_ref::<String>().map(String::as_str))
            .unwrap_or("non-string panic payload");
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_default();
        error!(location = %location, "Request task panicked: {}", message);
        default_hook(info);
    }));
}

async fn run_server() -> Result<()> {
    let config = config::load_config().context("Failed to load configuration")?;
    info!(
        "Config loaded: bind={}, data={}, public={}, max upload={} bytes",
        config.bind_address,
        config.data_path.display(),
        config.public_dir.display(),
        config.max_upload_bytes
    );

    let upload_dir = config.upload_dir();
    tokio::fs::create_dir_all(&upload_dir)
        .await
        .with_context(|| format!("Failed to create upload directory {}", upload_dir.display()))?;

    // A missing data file starts empty; a broken one starts empty and read-only
    let store = RecordStore::load(JsonFileStorage::new(&config.data_path));
    if store.is_read_only() {
        warn!(
            "{} could not be loaded; changes will be refused until it is fixed",
            config.data_path.display()
        );
    }

    let state = AppState {
        store: Arc::new(RwLock::new(store)),
        catalog: Arc::new(CityCatalog::default()),
        uploads: Arc::new(UploadService::new(upload_dir)),
    };

    let app = routes::app(state, &config);

    let addr: SocketAddr = config
        .bind_address
        .parse()
        .context("Failed to parse bind address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("Server running on http://{}", addr);
    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
