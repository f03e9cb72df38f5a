//! Wallet tracking core.
//!
//! # Data Flow
//! ```text
//! HTTP handler
//!     → service.rs (WalletService)
//!         → validator.rs (format check, register only)
//!         → store (exists / insert / list_all)
//!         → blockchain client (details only, tracked addresses only)
//!     → types.rs (Registration / TrackedWallets / WalletError)
//! ```
//!
//! Lifecycle of an address: Unknown → Tracked. There is no removal.

pub mod service;
pub mod types;
pub mod validator;

pub use service::WalletService;
pub use types::{Registration, TrackedWallets, TrackingStatus, WalletError, WalletResult};
pub use validator::{is_valid_btc_address, validate_value};
