//! Durable tracking store backed by sled.

use sled::{Db, Tree};
use std::path::Path;

use crate::store::{StoreError, StoreResult, TrackingStore};

/// Name of the tree holding tracked addresses.
pub const WALLETS_TREE: &str = "wallets";

/// sled-backed [`TrackingStore`]. Keys are address bytes, values are empty.
#[derive(Clone)]
pub struct SledStore {
    db: Db,
    wallets: Tree,
}

impl SledStore {
    /// Open (or create) the database at `path` and its `wallets` tree.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let db = sled::open(path.as_ref())?;
        let wallets = db.open_tree(WALLETS_TREE)?;

        tracing::info!(
            path = %path.as_ref().display(),
            tracked = wallets.len(),
            "Tracking store opened"
        );

        Ok(Self { db, wallets })
    }

    /// Flush all pending writes to disk.
    pub fn flush(&self) -> StoreResult<()> {
        self.db.flush()?;
        Ok(())
    }
}

impl TrackingStore for SledStore {
    fn exists(&self, address: &str) -> StoreResult<bool> {
        Ok(self.wallets.contains_key(address.as_bytes())?)
    }

    fn insert(&self, address: &str) -> StoreResult<bool> {
        // Swap only if absent, so two racing writers can never both create the record.
        let created = self
            .wallets
            .compare_and_swap(address.as_bytes(), None as Option<&[u8]>, Some(&b""[..]))?
            .is_ok();

        if created {
            self.wallets.flush()?;
        }
        Ok(created)
    }

    fn list_all(&self) -> StoreResult<Vec<String>> {
        let mut out = Vec::with_capacity(self.wallets.len());
        for item in self.wallets.iter() {
            let (key, _) = item?;
            let address = String::from_utf8(key.to_vec())
                .map_err(|e| StoreError::Corrupt(format!("non-UTF-8 address key: {}", e)))?;
            out.push(address);
        }
        Ok(out)
    }
}

impl std::fmt::Debug for SledStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SledStore")
            .field("tracked", &self.wallets.len())
            .finish()
    }
}
