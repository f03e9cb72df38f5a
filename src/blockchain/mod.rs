//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! WalletService (address already known to be tracked)
//!     → client.rs (one GET per call, explicit timeout)
//!     → types.rs (decode provider body, satoshis → BTC)
//!     → WalletDetails
//! ```
//!
//! # Constraints
//! - No caching, no retries, no rate limiting
//! - Any provider failure surfaces as a `BlockchainError`

pub mod client;
pub mod types;

pub use client::{BlockCypherClient, BlockchainClient};
pub use types::{BlockchainConfig, BlockchainError, BlockchainResult, WalletDetails};
