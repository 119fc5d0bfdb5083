//! Cache Module
//!
//! Bounded in-memory response caching with TTL expiry and
//! least-frequently-used eviction, keyed by endpoint and parameter set.

mod entry;
mod key;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use key::derive_key;
pub use stats::CacheStats;
pub use store::{BoundedFrequencyCache, CacheConfig};
