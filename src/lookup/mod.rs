//! Lookup Module
//!
//! The cache-aside orchestration core: cache read, durable fallback on
//! miss, and TTL-bound write-back.

mod orchestrator;

pub use orchestrator::{Found, Orchestrator, Source};
