//! Tracking store subsystem.
//!
//! # Data Flow
//! ```text
//! WalletService
//!     → TrackingStore trait (exists / insert / list_all)
//!     → sled_store.rs (durable, one `wallets` tree keyed by address)
//!     → memory.rs (ephemeral, for tests and throwaway runs)
//! ```
//!
//! # Design Decisions
//! - The store is a keyed set: the address string is the whole record
//! - `insert` is atomic and idempotent; an existing key is never an error
//! - Handles are cheap to clone and shared via `Arc<dyn TrackingStore>`

pub mod memory;
pub mod sled_store;

use thiserror::Error;

pub use memory::MemoryStore;
pub use sled_store::SledStore;

/// Errors raised by a tracking store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying database failure.
    #[error("database error: {0}")]
    Database(#[from] sled::Error),

    /// A stored key could not be decoded as an address.
    #[error("corrupt record: {0}")]
    Corrupt(String),

    /// The blocking task running a store call panicked or was cancelled.
    #[error("store task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Durable set of tracked addresses.
pub trait TrackingStore: Send + Sync {
    /// Check whether `address` is tracked.
    fn exists(&self, address: &str) -> StoreResult<bool>;

    /// Track `address`. Inserting an address that is already present is a
    /// no-op; the return value is `true` only when a new record was created.
    fn insert(&self, address: &str) -> StoreResult<bool>;

    /// Enumerate every tracked address.
    fn list_all(&self) -> StoreResult<Vec<String>>;
}
