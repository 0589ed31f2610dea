//! In-Memory Cache Module
//!
//! HashMap-backed implementation of the `Cache` contract with TTL expiration.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::cache::{Cache, CacheEntry};
use crate::error::StoreError;

// == Memory Cache ==
/// In-process cache store, safe for concurrent use by many callers.
///
/// Expired entries read as absent immediately and are physically removed
/// either lazily on the read that observes them or by the periodic
/// cleanup task. Cloning is cheap and shares the underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    entries: Arc<RwLock<HashMap<String, CacheEntry>>>,
}

impl MemoryCache {
    // == Constructor ==
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub async fn cleanup_expired(&self) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired());
        before - entries.len()
    }

    // == Length ==
    /// Returns the current number of entries, including not-yet-purged
    /// expired ones.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl Cache for MemoryCache {
    /// Retrieves a value by key.
    ///
    /// An expired entry is indistinguishable from one never written: both
    /// report `Ok(None)`. The expired entry is removed on the way out.
    async fn get(&self, key: &str) -> std::result::Result<Option<String>, StoreError> {
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                Some(entry) if !entry.is_expired() => return Ok(Some(entry.value.clone())),
                Some(_) => {}
                None => return Ok(None),
            }
        }

        // Observed an expired entry: upgrade to a write lock and remove it.
        // Re-check under the write lock in case a concurrent set replaced it.
        let mut entries = self.entries.write().await;
        if entries.get(key).is_some_and(|entry| entry.is_expired()) {
            entries.remove(key);
        }
        Ok(None)
    }

    /// Stores a key-value pair, overwriting any existing entry and
    /// resetting its TTL.
    async fn set(
        &self,
        key: &str,
        value: &str,
        ttl: Duration,
    ) -> std::result::Result<(), StoreError> {
        let entry = CacheEntry::new(value.to_string(), ttl);
        self.entries.write().await.insert(key.to_string(), entry);
        Ok(())
    }
}
