//! In-Memory Durable Store
//!
//! HashMap-backed implementation of the `Durable` contract, standing in for
//! an external persistence backend and seeded with placeholder records.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::durable::Durable;
use crate::error::StoreError;

// == Memory Durable Store ==
/// In-process durable store, safe for concurrent use.
///
/// Cloning is cheap and shares the underlying records.
#[derive(Debug, Clone, Default)]
pub struct MemoryDurable {
    records: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryDurable {
    // == Constructor ==
    /// Creates an empty durable store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Insert ==
    /// Inserts a record. Used by seeding and by tests; the lookup path
    /// never writes here.
    pub async fn insert(&self, id: impl Into<String>, data: impl Into<String>) {
        self.records.write().await.insert(id.into(), data.into());
    }

    // == Seed Placeholder Records ==
    /// Populates the store with `count` placeholder records, each keyed by
    /// a generated UUID string that also serves as its payload.
    ///
    /// Returns the seeded identifiers so callers (and tests) can look
    /// them up.
    pub async fn seed_placeholder(&self, count: usize) -> Vec<String> {
        let mut ids = Vec::with_capacity(count);
        {
            let mut records = self.records.write().await;
            for _ in 0..count {
                let id = Uuid::new_v4().to_string();
                records.insert(id.clone(), id.clone());
                ids.push(id);
            }
        }
        info!(count, "seeded durable store with placeholder records");
        ids
    }

    // == Length ==
    /// Returns the number of records held.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl Durable for MemoryDurable {
    async fn get(&self, key: &str) -> std::result::Result<Option<String>, StoreError> {
        Ok(self.records.read().await.get(key).cloned())
    }
}
