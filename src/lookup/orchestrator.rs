//! Lookup Orchestrator
//!
//! Implements the cache-aside decision tree over two injected store
//! handles: query the cache first, fall back to the durable store on a
//! miss, and populate the cache with a fixed TTL on the way back.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use crate::cache::Cache;
use crate::durable::Durable;
use crate::error::{LookupError, Result};

// == Source ==
/// Which store ultimately served a successful lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Served from a non-expired cache entry; the durable store was not
    /// touched.
    Cache,
    /// Served from the durable store after a cache miss; the cache was
    /// populated before returning.
    Durable,
}

// == Found ==
/// Successful lookup outcome: the payload and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Found {
    /// The opaque payload
    pub data: String,
    /// Which store served the request
    pub source: Source,
}

// == Orchestrator ==
/// Cache-aside lookup pipeline over injected store handles.
///
/// Holds no per-request state: every `lookup` invocation is independent,
/// and the store handles are shared and internally synchronized, so any
/// number of lookups may run concurrently. Two concurrent misses for one
/// key may both query the durable store and both write the cache; the
/// last writer's TTL wins and the duplicate work is accepted.
pub struct Orchestrator {
    cache: Arc<dyn Cache>,
    durable: Arc<dyn Durable>,
    /// Fixed TTL applied uniformly to every cache population write
    ttl: Duration,
}

impl Orchestrator {
    // == Constructor ==
    /// Creates an orchestrator over the given stores and fixed cache TTL.
    pub fn new(cache: Arc<dyn Cache>, durable: Arc<dyn Durable>, ttl: Duration) -> Self {
        Self {
            cache,
            durable,
            ttl,
        }
    }

    // == Lookup ==
    /// Resolves `id` to its payload, cache first.
    ///
    /// The decision tree is linear and every error is terminal; there are
    /// no retries and no fallback to stale data. The policy toward the
    /// cache layer is strict on both paths: a cache infrastructure error
    /// on read fails the request (no fallthrough to the durable store,
    /// which would mask cache degradation), and a failed population write
    /// fails it as well, even with the authoritative value in hand.
    pub async fn lookup(&self, id: &str) -> Result<Found> {
        match self.cache.get(id).await {
            Ok(Some(data)) => {
                debug!(id, "cache hit");
                return Ok(Found {
                    data,
                    source: Source::Cache,
                });
            }
            Ok(None) => debug!(id, "cache miss"),
            Err(err) => return Err(LookupError::CacheUnavailable(err)),
        }

        let data = match self.durable.get(id).await {
            Ok(Some(data)) => data,
            Ok(None) => return Err(LookupError::NotFound(id.to_string())),
            Err(err) => return Err(LookupError::DurableUnavailable(err)),
        };

        self.cache
            .set(id, &data, self.ttl)
            .await
            .map_err(LookupError::CacheWriteFailed)?;
        info!(id, ttl_secs = self.ttl.as_secs(), "populated cache from durable store");

        Ok(Found {
            data,
            source: Source::Durable,
        })
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use crate::cache::MemoryCache;
    use crate::durable::MemoryDurable;
    use crate::error::StoreError;

    const TTL: Duration = Duration::from_secs(600);

    // == Test Doubles ==

    /// Durable store double that counts reads and optionally fails.
    #[derive(Default)]
    struct CountingDurable {
        inner: MemoryDurable,
        gets: AtomicUsize,
        fail: bool,
    }

    impl CountingDurable {
        fn get_count(&self) -> usize {
            self.gets.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Durable for CountingDurable {
        async fn get(&self, key: &str) -> std::result::Result<Option<String>, StoreError> {
            self.gets.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(StoreError::new("storage offline"));
            }
            self.inner.get(key).await
        }
    }

    /// Cache double whose read and/or write paths fail on demand.
    #[derive(Default)]
    struct FlakyCache {
        inner: MemoryCache,
        fail_get: bool,
        fail_set: bool,
    }

    #[async_trait]
    impl Cache for FlakyCache {
        async fn get(&self, key: &str) -> std::result::Result<Option<String>, StoreError> {
            if self.fail_get {
                return Err(StoreError::new("cache connection refused"));
            }
            self.inner.get(key).await
        }

        async fn set(
            &self,
            key: &str,
            value: &str,
            ttl: Duration,
        ) -> std::result::Result<(), StoreError> {
            if self.fail_set {
                return Err(StoreError::new("cache write refused"));
            }
            self.inner.set(key, value, ttl).await
        }
    }

    fn orchestrator(cache: Arc<dyn Cache>, durable: Arc<dyn Durable>) -> Orchestrator {
        Orchestrator::new(cache, durable, TTL)
    }

    // == Decision Tree ==

    #[tokio::test]
    async fn test_cache_hit_short_circuits_durable() {
        let cache = Arc::new(MemoryCache::new());
        let durable = Arc::new(CountingDurable::default());
        cache.set("id1", "cached", TTL).await.unwrap();

        let lookup = orchestrator(cache, durable.clone());
        let found = lookup.lookup("id1").await.unwrap();

        assert_eq!(found.data, "cached");
        assert_eq!(found.source, Source::Cache);
        assert_eq!(durable.get_count(), 0, "durable store must not be queried on a hit");
    }

    #[tokio::test]
    async fn test_miss_populates_cache() {
        let cache = Arc::new(MemoryCache::new());
        let durable = Arc::new(MemoryDurable::new());
        durable.insert("id1", "payload").await;

        let lookup = orchestrator(cache.clone(), durable);
        let found = lookup.lookup("id1").await.unwrap();

        assert_eq!(found.data, "payload");
        assert_eq!(found.source, Source::Durable);

        // Direct cache read observes the populated value
        let cached = cache.get("id1").await.unwrap();
        assert_eq!(cached.as_deref(), Some("payload"));
    }

    #[tokio::test]
    async fn test_second_lookup_is_cache_hit() {
        let cache = Arc::new(MemoryCache::new());
        let durable = Arc::new(CountingDurable::default());
        durable.inner.insert("id1", "payload").await;

        let lookup = orchestrator(cache, durable.clone());
        let first = lookup.lookup("id1").await.unwrap();
        let second = lookup.lookup("id1").await.unwrap();

        assert_eq!(first.data, second.data);
        assert_eq!(first.source, Source::Durable);
        assert_eq!(second.source, Source::Cache);
        assert_eq!(durable.get_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ttl_expiry_reverts_to_miss_path() {
        let cache = Arc::new(MemoryCache::new());
        let durable = Arc::new(CountingDurable::default());
        durable.inner.insert("id1", "payload").await;

        let lookup = orchestrator(cache.clone(), durable.clone());
        lookup.lookup("id1").await.unwrap();
        assert_eq!(durable.get_count(), 1);

        tokio::time::advance(TTL + Duration::from_secs(1)).await;

        // Entry expired: the cache reports absence and the durable store
        // is consulted again
        assert!(cache.get("id1").await.unwrap().is_none());
        let found = lookup.lookup("id1").await.unwrap();
        assert_eq!(found.source, Source::Durable);
        assert_eq!(durable.get_count(), 2);
    }

    #[tokio::test]
    async fn test_not_found_performs_no_cache_write() {
        let cache = Arc::new(MemoryCache::new());
        let durable = Arc::new(MemoryDurable::new());

        let lookup = orchestrator(cache.clone(), durable);
        let result = lookup.lookup("absent").await;

        assert!(matches!(result, Err(LookupError::NotFound(id)) if id == "absent"));
        assert!(cache.is_empty().await, "no negative caching");
    }

    #[tokio::test]
    async fn test_idempotent_relookup_returns_identical_data() {
        let cache = Arc::new(MemoryCache::new());
        let durable = Arc::new(MemoryDurable::new());
        durable.insert("id1", "payload").await;

        let lookup = orchestrator(cache, durable);
        let first = lookup.lookup("id1").await.unwrap();
        let second = lookup.lookup("id1").await.unwrap();

        assert_eq!(first.data, second.data);
    }

    // == Failure Isolation ==

    #[tokio::test]
    async fn test_cache_read_error_fails_without_durable_fallthrough() {
        let cache = Arc::new(FlakyCache {
            fail_get: true,
            ..Default::default()
        });
        let durable = Arc::new(CountingDurable::default());
        durable.inner.insert("id1", "payload").await;

        let lookup = orchestrator(cache, durable.clone());
        let result = lookup.lookup("id1").await;

        assert!(matches!(result, Err(LookupError::CacheUnavailable(_))));
        assert_eq!(
            durable.get_count(),
            0,
            "a degraded cache must not be silently bypassed"
        );
    }

    #[tokio::test]
    async fn test_durable_error_leaves_cache_unwritten() {
        let cache = Arc::new(MemoryCache::new());
        let durable = Arc::new(CountingDurable {
            fail: true,
            ..Default::default()
        });

        let lookup = orchestrator(cache.clone(), durable);
        let result = lookup.lookup("id1").await;

        assert!(matches!(result, Err(LookupError::DurableUnavailable(_))));
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_cache_write_failure_fails_lookup() {
        let cache = Arc::new(FlakyCache {
            fail_set: true,
            ..Default::default()
        });
        let durable = Arc::new(MemoryDurable::new());
        durable.insert("id1", "payload").await;

        let lookup = orchestrator(cache, durable);
        let result = lookup.lookup("id1").await;

        // Strict policy: the authoritative value was retrieved, but the
        // failed population surfaces as an error
        assert!(matches!(result, Err(LookupError::CacheWriteFailed(_))));
    }

    #[tokio::test]
    async fn test_concurrent_misses_both_complete() {
        let cache = Arc::new(MemoryCache::new());
        let durable = Arc::new(MemoryDurable::new());
        durable.insert("id1", "payload").await;

        let lookup = Arc::new(orchestrator(cache.clone(), durable));
        let a = {
            let lookup = lookup.clone();
            tokio::spawn(async move { lookup.lookup("id1").await })
        };
        let b = {
            let lookup = lookup.clone();
            tokio::spawn(async move { lookup.lookup("id1").await })
        };

        let (a, b) = (a.await.unwrap().unwrap(), b.await.unwrap().unwrap());
        assert_eq!(a.data, "payload");
        assert_eq!(b.data, "payload");
        assert_eq!(cache.get("id1").await.unwrap().as_deref(), Some("payload"));
    }
}
