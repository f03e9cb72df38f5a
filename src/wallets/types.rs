//! Wallet tracking result values and error taxonomy.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::blockchain::BlockchainError;
use crate::store::StoreError;

/// Errors returned by [`crate::wallets::WalletService`].
#[derive(Debug, Error)]
pub enum WalletError {
    /// Candidate is not a syntactically valid Bitcoin address.
    #[error("Invalid Bitcoin address")]
    InvalidFormat,

    /// Candidate is already tracked.
    #[error("Address already tracked")]
    AlreadyTracked,

    /// Enrichment requested for an address that is not tracked.
    #[error("Wallet not tracked")]
    NotTracked,

    /// The blockchain provider call failed.
    #[error(transparent)]
    Transport(#[from] BlockchainError),

    /// The tracking store failed.
    #[error("Tracking store failure: {0}")]
    Store(#[from] StoreError),
}

impl WalletError {
    /// Short, stable label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            WalletError::InvalidFormat => "invalid_format",
            WalletError::AlreadyTracked => "already_tracked",
            WalletError::NotTracked => "not_tracked",
            WalletError::Transport(_) => "transport",
            WalletError::Store(_) => "store",
        }
    }
}

/// Result type for wallet operations.
pub type WalletResult<T> = Result<T, WalletError>;

/// Tracking status reported on registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackingStatus {
    Tracking,
}

/// Confirmation returned by a successful registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub status: TrackingStatus,
    pub address: String,
}

/// All tracked addresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedWallets {
    pub wallets: Vec<String>,
    pub count: usize,
}

impl From<Vec<String>> for TrackedWallets {
    fn from(wallets: Vec<String>) -> Self {
        Self {
            count: wallets.len(),
            wallets,
        }
    }
}
