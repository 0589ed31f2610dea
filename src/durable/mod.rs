//! Durable Store Module
//!
//! The authoritative key-value persistence contract, queried only on a
//! cache miss, plus an in-memory implementation seeded at startup.

mod memory;

use async_trait::async_trait;

use crate::error::StoreError;

// Re-export public types
pub use memory::MemoryDurable;

// == Durable Contract ==
/// Authoritative record store. Records are created once during seeding and
/// never mutated or deleted by the lookup path.
#[async_trait]
pub trait Durable: Send + Sync {
    /// Retrieves the authoritative value for `key`.
    ///
    /// `Ok(None)` means no record exists for the key; this is terminal and
    /// never cached as a negative result. `Err` is reserved for backend
    /// failure and must propagate distinctly from absence.
    async fn get(&self, key: &str) -> std::result::Result<Option<String>, StoreError>;
}
