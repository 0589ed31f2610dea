//! Response DTOs for the lookup service API
//!
//! Defines the structure of outgoing HTTP response bodies with named
//! fields, serialized explicitly via serde.

use serde::Serialize;

/// Response body for the lookup operation (GET /get-info/:id)
#[derive(Debug, Clone, Serialize)]
pub struct GetInfoResponse {
    /// The opaque payload associated with the requested identifier
    pub data: String,
}

impl GetInfoResponse {
    /// Creates a new GetInfoResponse
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
