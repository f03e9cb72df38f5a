//! Provider wire types and error definitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export BlockchainConfig from config module to avoid duplication
pub use crate::config::schema::BlockchainConfig;

/// Satoshis per whole bitcoin.
pub const SATOSHIS_PER_BTC: f64 = 1e8;

/// Errors that can occur while talking to the blockchain provider.
///
/// Every variant is a transport failure from the caller's point of view.
#[derive(Debug, Error)]
pub enum BlockchainError {
    /// Connection or request failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Request timed out.
    #[error("Provider timeout after {0} seconds")]
    Timeout(u64),

    /// Provider answered with a non-success status.
    #[error("Provider returned status {0}")]
    Status(u16),

    /// Response body could not be decoded.
    #[error("Malformed provider response: {0}")]
    Decode(String),

    /// Provider URL is unusable.
    #[error("Invalid provider URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Result type for blockchain operations.
pub type BlockchainResult<T> = Result<T, BlockchainError>;

/// Subset of the BlockCypher address endpoint body that we consume.
#[derive(Debug, Clone, Deserialize)]
pub struct AddressBalance {
    /// Confirmed balance in satoshis.
    pub final_balance: i64,
    /// Total number of transactions involving the address.
    pub n_tx: u64,
}

impl AddressBalance {
    /// Convert into the public view, moving the balance to whole-coin units.
    pub fn into_details(self, address: &str) -> WalletDetails {
        WalletDetails {
            address: address.to_string(),
            balance_btc: self.final_balance as f64 / SATOSHIS_PER_BTC,
            total_transactions: self.n_tx,
        }
    }
}

/// Live balance view of a tracked address. Built per request, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletDetails {
    pub address: String,
    pub balance_btc: f64,
    pub total_transactions: u64,
}
