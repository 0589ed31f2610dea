//! API Module
//!
//! HTTP handlers and routing for the lookup service REST API.
//!
//! # Endpoints
//! - `GET /get-info/:id` - Look up the payload for an identifier
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
