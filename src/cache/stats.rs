//! Cache Statistics Module
//!
//! Tracks cache performance counters: hits, misses, evictions, and stores
//! refused by the result-count gate.

use serde::Serialize;

// == Cache Stats ==
/// Snapshot of cache performance counters and occupancy.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Number of successful cache retrievals
    pub hits: u64,
    /// Number of failed cache retrievals (key absent or expired)
    pub misses: u64,
    /// Number of entries evicted by the frequency policy
    pub evictions: u64,
    /// Number of stores refused because the result count exceeded the ceiling
    pub rejected: u64,
    /// Current number of live entries
    pub size: usize,
    /// Configured maximum number of entries
    pub max_size: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new(max_size: usize) -> Self {
        Self {
            max_size,
            ..Self::default()
        }
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Eviction ==
    /// Increments the eviction counter.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    // == Record Rejection ==
    /// Increments the rejected-store counter.
    pub fn record_rejection(&mut self) {
        self.rejected += 1;
    }

    // == Update Entry Count ==
    /// Updates the live entry count.
    pub fn set_size(&mut self, size: usize) {
        self.size = size;
    }
}
