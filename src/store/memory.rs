//! In-memory tracking store.

use dashmap::DashSet;
use std::sync::Arc;

use crate::store::{StoreResult, TrackingStore};

/// Thread-safe, non-durable [`TrackingStore`]. Clones share the same set.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<DashSet<String>>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tracked addresses.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl TrackingStore for MemoryStore {
    fn exists(&self, address: &str) -> StoreResult<bool> {
        Ok(self.inner.contains(address))
    }

    fn insert(&self, address: &str) -> StoreResult<bool> {
        Ok(self.inner.insert(address.to_string()))
    }

    fn list_all(&self) -> StoreResult<Vec<String>> {
        let mut all: Vec<String> = self.inner.iter().map(|r| r.key().clone()).collect();
        all.sort();
        Ok(all)
    }
}
