//! Error types for the lookup service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

// == Store Error ==
/// Infrastructure failure of a backing store (cache or durable).
///
/// Legitimate absence of a key is never a `StoreError`; stores report
/// absence through `Ok(None)`. This type covers only connectivity and
/// backend faults.
#[derive(Error, Debug, Clone)]
#[error("store backend error: {0}")]
pub struct StoreError(pub String);

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

// == Lookup Error Enum ==
/// Unified error type for the lookup pipeline.
///
/// Every variant is terminal: the orchestrator performs no retries,
/// backoff, or fallback to stale data.
#[derive(Error, Debug)]
pub enum LookupError {
    /// No record exists in the durable store for the identifier
    #[error("no record found for id: {0}")]
    NotFound(String),

    /// Cache store could not be reached or errored (not a miss)
    #[error("cache unavailable: {0}")]
    CacheUnavailable(#[source] StoreError),

    /// Durable store could not be reached or errored (not a missing record)
    #[error("durable store unavailable: {0}")]
    DurableUnavailable(#[source] StoreError),

    /// The post-miss cache population write failed
    #[error("cache write failed: {0}")]
    CacheWriteFailed(#[source] StoreError),
}

// == IntoResponse Implementation ==
impl IntoResponse for LookupError {
    /// Maps every lookup outcome to exactly one HTTP status.
    ///
    /// `NotFound` is the only client-distinguishable failure; the three
    /// infrastructure variants collapse to a generic 500 body, with the
    /// specific cause logged rather than leaked to the caller.
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            LookupError::NotFound(_) => (StatusCode::NOT_FOUND, "Data not found".to_string()),
            LookupError::CacheUnavailable(_)
            | LookupError::DurableUnavailable(_)
            | LookupError::CacheWriteFailed(_) => {
                error!(cause = %self, "lookup failed with infrastructure error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the lookup service.
pub type Result<T> = std::result::Result<T, LookupError>;
