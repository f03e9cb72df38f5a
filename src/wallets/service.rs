//! Wallet orchestration: registration, listing and on-demand enrichment.
//!
//! # Responsibilities
//! - Admit only syntactically valid, not-yet-tracked addresses
//! - List the tracked set without touching the provider
//! - Enrich a tracked address with live provider data
//!
//! # Design Decisions
//! - Validation runs before any store access
//! - The tracked check runs before any outbound call
//! - No state is held between calls; the store owns it all
//! - Store calls run on the blocking pool, never on a runtime worker

use serde_json::Value;
use std::sync::Arc;

use crate::blockchain::{BlockchainClient, WalletDetails};
use crate::observability::metrics;
use crate::store::{StoreError, StoreResult, TrackingStore};
use crate::wallets::types::{Registration, TrackedWallets, TrackingStatus, WalletError, WalletResult};
use crate::wallets::validator::is_valid_btc_address;

/// Orchestrates the tracking store and the blockchain client.
#[derive(Clone)]
pub struct WalletService {
    store: Arc<dyn TrackingStore>,
    chain: Arc<dyn BlockchainClient>,
}

impl WalletService {
    pub fn new(store: Arc<dyn TrackingStore>, chain: Arc<dyn BlockchainClient>) -> Self {
        Self { store, chain }
    }

    /// Register an address taken from untyped input (e.g. a JSON body).
    ///
    /// Anything other than a JSON string is rejected as `InvalidFormat`.
    pub async fn register_value(&self, candidate: &Value) -> WalletResult<Registration> {
        match candidate.as_str() {
            Some(address) => self.register_address(address).await,
            None => {
                metrics::record_registration(WalletError::InvalidFormat.kind());
                Err(WalletError::InvalidFormat)
            }
        }
    }

    /// Start tracking `candidate`.
    ///
    /// # Errors
    /// - `InvalidFormat` if the address shape is wrong (store untouched)
    /// - `AlreadyTracked` if the address is already in the store
    pub async fn register_address(&self, candidate: &str) -> WalletResult<Registration> {
        let result = self.try_register(candidate).await;
        match &result {
            Ok(_) => {
                metrics::record_registration("created");
                metrics::record_wallet_tracked();
            }
            Err(e) => metrics::record_registration(e.kind()),
        }
        result
    }

    async fn try_register(&self, candidate: &str) -> WalletResult<Registration> {
        if !is_valid_btc_address(candidate) {
            return Err(WalletError::InvalidFormat);
        }

        let address = candidate.to_string();
        let created = self
            .with_store(move |store| {
                if store.exists(&address)? {
                    return Ok(false);
                }
                // A concurrent registration may land between the check and the insert.
                store.insert(&address)
            })
            .await?;

        if !created {
            return Err(WalletError::AlreadyTracked);
        }

        tracing::info!(address = %candidate, "Address tracked");

        Ok(Registration {
            status: TrackingStatus::Tracking,
            address: candidate.to_string(),
        })
    }

    /// List every tracked address. Never calls the provider.
    pub async fn list_tracked(&self) -> WalletResult<TrackedWallets> {
        let wallets = self.with_store(|store| store.list_all()).await?;
        metrics::record_tracked_wallets(wallets.len());
        Ok(TrackedWallets::from(wallets))
    }

    /// Fetch live data for a tracked address.
    ///
    /// # Errors
    /// - `NotTracked` if the address is unknown (no outbound call is made)
    /// - `Transport` if the provider call fails
    pub async fn wallet_details(&self, candidate: &str) -> WalletResult<WalletDetails> {
        let address = candidate.to_string();
        if !self.with_store(move |store| store.exists(&address)).await? {
            metrics::record_enrichment(WalletError::NotTracked.kind());
            return Err(WalletError::NotTracked);
        }

        match self.chain.fetch(candidate).await {
            Ok(details) => {
                metrics::record_enrichment("ok");
                Ok(details)
            }
            Err(e) => {
                tracing::warn!(address = %candidate, error = %e, "Enrichment failed");
                metrics::record_enrichment("transport");
                Err(WalletError::Transport(e))
            }
        }
    }

    /// Run `op` against the store on the blocking pool.
    async fn with_store<T, F>(&self, op: F) -> WalletResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&dyn TrackingStore) -> StoreResult<T> + Send + 'static,
    {
        let store = self.store.clone();
        let result = tokio::task::spawn_blocking(move || op(&*store))
            .await
            .map_err(StoreError::from)?;
        Ok(result?)
    }
}

impl std::fmt::Debug for WalletService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletService").finish_non_exhaustive()
    }
}
