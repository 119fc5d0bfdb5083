//! Catalog Cache - a bounded in-memory response cache
//!
//! Guards outbound third-party catalog API calls with TTL expiry and
//! least-frequently-used eviction, keyed by endpoint and parameter set.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{BoundedFrequencyCache, CacheConfig};
pub use config::Config;
pub use tasks::spawn_sweep_task;
