//! Response models for the lookup service API
//!
//! Defines the DTOs (Data Transfer Objects) used for serializing HTTP
//! response bodies. The service is read-only, so there are no request
//! bodies to model.

pub mod responses;

// Re-export commonly used types
pub use responses::{ErrorResponse, GetInfoResponse, HealthResponse};
