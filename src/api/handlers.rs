//! API Handlers
//!
//! HTTP request handlers for each lookup service endpoint.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::cache::MemoryCache;
use crate::config::Config;
use crate::durable::MemoryDurable;
use crate::error::Result;
use crate::lookup::Orchestrator;
use crate::models::{GetInfoResponse, HealthResponse};

/// Application state shared across all handlers.
///
/// Holds the orchestrator plus the concrete cache handle, which the
/// background cleanup task needs separately from the lookup path.
#[derive(Clone)]
pub struct AppState {
    /// Cache-aside lookup pipeline
    pub lookup: Arc<Orchestrator>,
    /// Concrete cache handle for the cleanup task
    pub cache: MemoryCache,
}

impl AppState {
    /// Creates a new AppState over the given stores and cache TTL.
    pub fn new(cache: MemoryCache, durable: MemoryDurable, cache_ttl: Duration) -> Self {
        let lookup = Arc::new(Orchestrator::new(
            Arc::new(cache.clone()),
            Arc::new(durable),
            cache_ttl,
        ));
        Self { lookup, cache }
    }

    /// Creates a new AppState from configuration with fresh stores.
    ///
    /// The durable store starts empty; seeding happens at startup.
    pub fn from_config(config: &Config) -> (Self, MemoryDurable) {
        let durable = MemoryDurable::new();
        let state = Self::new(
            MemoryCache::new(),
            durable.clone(),
            Duration::from_secs(config.cache_ttl),
        );
        (state, durable)
    }
}

/// Handler for GET /get-info/:id
///
/// Resolves the identifier through the cache-aside pipeline and returns
/// its payload. Errors map to HTTP statuses via `LookupError`.
pub async fn get_info_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GetInfoResponse>> {
    let found = state.lookup.lookup(&id).await?;

    Ok(Json(GetInfoResponse::new(found.data)))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
