//! Startup orchestration.
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Subsystems initialize in order: store, blockchain client, HTTP server
//! - Opening the sled store creates the `wallets` tree if it is missing

use std::sync::Arc;
use thiserror::Error;

use crate::blockchain::{BlockCypherClient, BlockchainError};
use crate::config::{StorageBackend, TrackerConfig};
use crate::http::HttpServer;
use crate::observability::metrics;
use crate::store::{MemoryStore, SledStore, StoreError, TrackingStore};
use crate::wallets::WalletService;

/// Fatal startup failures.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Failed to open tracking store: {0}")]
    Store(#[from] StoreError),

    #[error("Failed to initialize blockchain client: {0}")]
    Blockchain(#[from] BlockchainError),
}

/// Open the configured tracking store.
pub fn open_store(config: &TrackerConfig) -> Result<Arc<dyn TrackingStore>, StartupError> {
    let store: Arc<dyn TrackingStore> = match config.storage.backend {
        StorageBackend::Sled => Arc::new(SledStore::open(&config.storage.path)?),
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory tracking store; tracked wallets are lost on exit");
            Arc::new(MemoryStore::new())
        }
    };
    metrics::record_tracked_wallets(store.list_all()?.len());
    Ok(store)
}

/// Build a ready-to-run server from configuration.
pub fn build_server(config: TrackerConfig) -> Result<HttpServer, StartupError> {
    let store = open_store(&config)?;
    let chain = Arc::new(BlockCypherClient::new(&config.blockchain)?);
    let wallets = WalletService::new(store, chain);
    Ok(HttpServer::new(config, wallets))
}
