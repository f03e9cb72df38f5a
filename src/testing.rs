//! Test doubles shared by unit tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use crate::blockchain::types::AddressBalance;
use crate::blockchain::{BlockchainClient, BlockchainError, BlockchainResult, WalletDetails};

/// Blockchain client that counts calls and answers from a canned response.
pub struct StubChain {
    calls: AtomicU32,
    balance: Option<AddressBalance>,
    failure: Mutex<Option<BlockchainError>>,
}

impl StubChain {
    pub fn with_balance(final_balance: i64, n_tx: u64) -> Self {
        Self {
            calls: AtomicU32::new(0),
            balance: Some(AddressBalance { final_balance, n_tx }),
            failure: Mutex::new(None),
        }
    }

    /// Fails every call; the given error is returned on the first call.
    pub fn failing(error: BlockchainError) -> Self {
        Self {
            calls: AtomicU32::new(0),
            balance: None,
            failure: Mutex::new(Some(error)),
        }
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BlockchainClient for StubChain {
    async fn fetch(&self, address: &str) -> BlockchainResult<WalletDetails> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.balance {
            Some(balance) => Ok(balance.clone().into_details(address)),
            None => Err(self
                .failure
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| BlockchainError::Http("stub failure".to_string()))),
        }
    }
}
