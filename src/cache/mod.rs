//! Cache Module
//!
//! Provides the cache-side store contract and an in-memory implementation
//! with TTL expiration.

mod entry;
mod memory;


use std::time::Duration;

use async_trait::async_trait;

use crate::error::StoreError;

// Re-export public types
pub use entry::CacheEntry;
pub use memory::MemoryCache;

// == Cache Contract ==
/// Low-latency key-value store with per-entry TTL, queried first on lookup.
///
/// Absence (never written, or expired) is a normal outcome reported as
/// `Ok(None)`; `Err` is reserved for infrastructure failure of the cache
/// backend itself and must never be conflated with a miss.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Retrieves the value for `key`, or `None` if absent or expired.
    async fn get(&self, key: &str) -> std::result::Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, expiring after `ttl`.
    ///
    /// Unconditionally overwrites any existing entry for the key.
    async fn set(&self, key: &str, value: &str, ttl: Duration)
        -> std::result::Result<(), StoreError>;
}
