//! Cache Entry Module
//!
//! Defines the structure for individual cached responses.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde_json::Value;

// == Cache Entry ==
/// A single cached response with its access metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The cached payload, opaque to the cache
    pub data: Value,
    /// Insertion timestamp (Unix milliseconds)
    pub inserted_at: u64,
    /// Number of times this entry has been read, starting at 1 on insertion
    pub access_count: u64,
    /// The derived lookup key, kept on the entry for diagnostics
    pub key: String,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a fresh entry with an access count of 1.
    ///
    /// # Arguments
    /// * `key` - The derived lookup key this entry is stored under
    /// * `data` - The payload to cache
    pub fn new(key: String, data: Value) -> Self {
        Self {
            data,
            inserted_at: current_timestamp_ms(),
            access_count: 1,
            key,
        }
    }

    // == Record Access ==
    /// Increments the access counter for a read hit.
    pub fn record_access(&mut self) {
        self.access_count += 1;
    }

    // == Age ==
    /// Returns the entry's age in milliseconds.
    pub fn age_ms(&self) -> u64 {
        current_timestamp_ms().saturating_sub(self.inserted_at)
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived the given TTL.
    ///
    /// Boundary condition: an entry is expired strictly when its age
    /// exceeds the TTL. TTL is absolute from insertion time; reads never
    /// extend it.
    ///
    /// # Arguments
    /// * `ttl` - The cache-wide time-to-live
    pub fn is_expired(&self, ttl: Duration) -> bool {
        u128::from(self.age_ms()) > ttl.as_millis()
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
