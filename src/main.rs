//! Coin Tracker server
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ─────────────────▶ http::server ──▶ http::routes ──▶ wallets::WalletService
//!                                                              │        │
//!                                             validator ◀──────┘        │
//!                                                                       ├──▶ store (sled)
//!                                                                       │
//!                                                                       └──▶ blockchain (BlockCypher)
//!
//!     Cross-cutting: config, observability (logging, metrics), lifecycle (startup, shutdown)
//! ```

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use coin_tracker::config::{read_config, validation::validate_config, ConfigError, TrackerConfig};
use coin_tracker::lifecycle::{build_server, signals, Shutdown};
use coin_tracker::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "coin-tracker")]
#[command(about = "Track Bitcoin addresses and look up live balances", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

/// File (or defaults) plus command-line overrides, validated once as a whole.
fn resolve_config(cli: &Cli) -> Result<TrackerConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => read_config(path)?,
        None => TrackerConfig::default(),
    };
    if let Some(bind) = &cli.bind {
        config.listener.bind_address = bind.clone();
    }
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    logging::init_logging(&config.observability)?;

    tracing::info!("coin-tracker v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        storage = ?config.storage.backend,
        provider = %config.blockchain.api_base_url,
        provider_timeout_secs = config.blockchain.timeout_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        // Address already checked by validation.
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let server = build_server(config)?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(signals::shutdown_on_signal(shutdown.clone()));

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
