//! Bitcoin wallet tracker.
//!
//! Keeps a durable set of Bitcoin addresses and enriches them on demand with
//! live balance and transaction counts from a public indexing service.

pub mod blockchain;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod store;
pub mod wallets;

#[cfg(test)]
pub(crate) mod testing;

pub use config::TrackerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use wallets::{WalletError, WalletService};
