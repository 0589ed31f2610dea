//! Info Cache - A read-through cache-aside lookup service
//!
//! Serves opaque payloads by identifier from a TTL-bound in-memory cache,
//! falling back to a durable store on a miss and populating the cache on
//! the way back.

pub mod api;
pub mod cache;
pub mod config;
pub mod durable;
pub mod error;
pub mod lookup;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
