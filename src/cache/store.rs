//! Cache Store Module
//!
//! The bounded frequency cache: HashMap storage keyed by canonical
//! endpoint/parameter keys, TTL expiry checked lazily on read, and
//! least-frequently-used eviction when full.

use std::collections::HashMap;
use std::time::Duration;

use serde_json::{Map, Value};
use tracing::debug;

use crate::cache::key::derive_key;
use crate::cache::{CacheEntry, CacheStats};

// == Cache Config ==
/// Immutable construction-time configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of live entries
    pub max_entries: usize,
    /// Time-to-live, absolute from insertion
    pub ttl: Duration,
    /// Result-count ceiling: stores carrying a larger hint are refused
    pub max_cacheable_results: usize,
}

// == Bounded Frequency Cache ==
/// In-memory response cache with TTL expiry and LFU eviction.
///
/// Every operation is total: lookups miss rather than fail, and stores
/// refused by the result-count gate are silent no-ops. Caching is an
/// optimization, never a correctness requirement for callers.
#[derive(Debug)]
pub struct BoundedFrequencyCache {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Performance counters
    stats: CacheStats,
    /// Construction-time configuration
    config: CacheConfig,
}

impl BoundedFrequencyCache {
    // == Constructor ==
    /// Creates an empty cache with the given configuration.
    pub fn new(config: CacheConfig) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(config.max_entries),
            config,
        }
    }

    // == Get ==
    /// Looks up a cached response for an endpoint and parameter set.
    ///
    /// Returns `None` on an absent or expired key. An expired entry is
    /// removed on the spot and never observable as a hit, even if the
    /// background sweep has not run yet. A hit increments the entry's
    /// access count; TTL is never refreshed by reads.
    ///
    /// # Arguments
    /// * `endpoint` - Caller-defined endpoint identifier
    /// * `params` - Parameter map, order-insensitive
    pub fn get(&mut self, endpoint: &str, params: &Map<String, Value>) -> Option<Value> {
        let key = derive_key(endpoint, params);

        match self.entries.get_mut(&key) {
            Some(entry) => {
                if entry.is_expired(self.config.ttl) {
                    self.entries.remove(&key);
                    self.stats.set_size(self.entries.len());
                    self.stats.record_miss();
                    None
                } else {
                    entry.record_access();
                    self.stats.record_hit();
                    Some(entry.data.clone())
                }
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Set ==
    /// Stores a response, evicting the least-frequently-used entry first
    /// if the cache is full and the key is new.
    ///
    /// If `result_count` is supplied and exceeds the configured ceiling
    /// the store is silently refused. An omitted hint is always cacheable.
    /// A store on an existing key is an unconditional overwrite: the old
    /// entry's access history is discarded and the count restarts at 1.
    ///
    /// # Arguments
    /// * `endpoint` - Caller-defined endpoint identifier
    /// * `params` - Parameter map, order-insensitive
    /// * `data` - The payload to cache
    /// * `result_count` - Optional hint of how many results `data` holds
    pub fn set(
        &mut self,
        endpoint: &str,
        params: &Map<String, Value>,
        data: Value,
        result_count: Option<usize>,
    ) -> bool {
        if let Some(count) = result_count {
            if count > self.config.max_cacheable_results {
                debug!(
                    "Refusing to cache {} results for '{}' (ceiling {})",
                    count, endpoint, self.config.max_cacheable_results
                );
                self.stats.record_rejection();
                return false;
            }
        }

        let key = derive_key(endpoint, params);

        // Evict only when admitting a new key at capacity; overwrites
        // reuse the existing slot.
        if self.entries.len() >= self.config.max_entries && !self.entries.contains_key(&key) {
            self.evict_least_frequent();
        }

        let entry = CacheEntry::new(key.clone(), data);
        self.entries.insert(key, entry);
        self.stats.set_size(self.entries.len());
        true
    }

    // == Eviction ==
    /// Removes the entry with the lowest access count.
    ///
    /// Full scan over live entries. Ties break deterministically: older
    /// insertion wins, then the lexicographically smaller key.
    fn evict_least_frequent(&mut self) {
        let victim = self
            .entries
            .values()
            .min_by(|a, b| {
                (a.access_count, a.inserted_at, &a.key)
                    .cmp(&(b.access_count, b.inserted_at, &b.key))
            })
            .map(|entry| entry.key.clone());

        if let Some(key) = victim {
            debug!("Evicting least-frequently-used entry '{}'", key);
            self.entries.remove(&key);
            self.stats.record_eviction();
            self.stats.set_size(self.entries.len());
        }
    }

    // == Purge Expired ==
    /// Removes all entries older than the TTL.
    ///
    /// Called by the background sweep; returns the number removed.
    pub fn purge_expired(&mut self) -> usize {
        let ttl = self.config.ttl;
        let expired_keys: Vec<String> = self
            .entries
            .values()
            .filter(|entry| entry.is_expired(ttl))
            .map(|entry| entry.key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            self.entries.remove(&key);
        }

        self.stats.set_size(self.entries.len());
        count
    }

    // == Clear ==
    /// Drops all entries. Idempotent; counters are preserved.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats.set_size(0);
    }

    // == Stats ==
    /// Returns a snapshot of the current counters and occupancy.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_size(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of live entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::thread::sleep;

    fn test_config(max_entries: usize) -> CacheConfig {
        CacheConfig {
            max_entries,
            ttl: Duration::from_secs(300),
            max_cacheable_results: 100,
        }
    }

    fn params(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_store_new() {
        let cache = BoundedFrequencyCache::new(test_config(100));
        assert_eq!(cache.len(), 0);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_store_set_and_get() {
        let mut cache = BoundedFrequencyCache::new(test_config(100));

        cache.set("movies.search", &params(json!({"q": "akira"})), json!({"id": 1}), None);
        let value = cache.get("movies.search", &params(json!({"q": "akira"})));

        assert_eq!(value, Some(json!({"id": 1})));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_get_miss_on_absent_key() {
        let mut cache = BoundedFrequencyCache::new(test_config(100));

        assert_eq!(cache.get("movies.search", &Map::new()), None);
        assert_eq!(cache.stats().misses, 1);
    }

    #[test]
    fn test_param_order_does_not_affect_lookup() {
        let mut cache = BoundedFrequencyCache::new(test_config(100));

        cache.set("movies.search", &params(json!({"b": 2, "a": 1})), json!("v"), None);
        let value = cache.get("movies.search", &params(json!({"a": 1, "b": 2})));

        assert_eq!(value, Some(json!("v")));
    }

    #[test]
    fn test_store_overwrite() {
        let mut cache = BoundedFrequencyCache::new(test_config(100));
        let p = params(json!({"id": 7}));

        cache.set("movies.detail", &p, json!("v1"), None);
        cache.set("movies.detail", &p, json!("v2"), None);

        assert_eq!(cache.get("movies.detail", &p), Some(json!("v2")));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_ttl_expiration() {
        let mut cache = BoundedFrequencyCache::new(CacheConfig {
            max_entries: 100,
            ttl: Duration::from_millis(100),
            max_cacheable_results: 100,
        });
        let p = Map::new();

        cache.set("movies.popular", &p, json!("v"), None);
        assert_eq!(cache.get("movies.popular", &p), Some(json!("v")));

        sleep(Duration::from_millis(150));

        assert_eq!(cache.get("movies.popular", &p), None);
        // Lazy expiry removed the entry
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn test_lfu_eviction_under_pressure() {
        let mut cache = BoundedFrequencyCache::new(test_config(2));
        let p = Map::new();

        cache.set("a", &p, json!(1), None);
        cache.set("b", &p, json!(2), None);

        // Raise a's count to 2; b stays at 1
        cache.get("a", &p);

        // Admitting c must evict b, the lowest-count entry
        cache.set("c", &p, json!(3), None);

        assert_eq!(cache.get("a", &p), Some(json!(1)));
        assert_eq!(cache.get("b", &p), None);
        assert_eq!(cache.get("c", &p), Some(json!(3)));
        assert_eq!(cache.stats().evictions, 1);
    }

    #[test]
    fn test_eviction_tie_breaks_on_insertion_order() {
        let mut cache = BoundedFrequencyCache::new(test_config(2));
        let p = Map::new();

        cache.set("first", &p, json!(1), None);
        sleep(Duration::from_millis(5));
        cache.set("second", &p, json!(2), None);

        // Both counts are 1; the older entry is the victim
        cache.set("third", &p, json!(3), None);

        assert_eq!(cache.get("first", &p), None);
        assert_eq!(cache.get("second", &p), Some(json!(2)));
        assert_eq!(cache.get("third", &p), Some(json!(3)));
    }

    #[test]
    fn test_overwrite_resets_frequency() {
        let mut cache = BoundedFrequencyCache::new(test_config(2));
        let p = Map::new();

        cache.set("x", &p, json!(1), None);
        cache.get("x", &p);
        cache.get("x", &p);
        cache.get("x", &p);

        cache.set("y", &p, json!(2), None);
        cache.get("y", &p);

        // Overwrite discards x's access history; its count is back to 1
        cache.set("x", &p, json!(9), None);

        // Under pressure, x (count 1) loses to y (count 2)
        cache.set("z", &p, json!(3), None);

        assert_eq!(cache.get("x", &p), None);
        assert_eq!(cache.get("y", &p), Some(json!(2)));
        assert_eq!(cache.get("z", &p), Some(json!(3)));
    }

    #[test]
    fn test_overwrite_at_capacity_does_not_evict() {
        let mut cache = BoundedFrequencyCache::new(test_config(2));
        let p = Map::new();

        cache.set("a", &p, json!(1), None);
        cache.set("b", &p, json!(2), None);

        // Full, but "a" already exists: no eviction
        cache.set("a", &p, json!(3), None);

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.stats().evictions, 0);
        assert_eq!(cache.get("b", &p), Some(json!(2)));
    }

    #[test]
    fn test_result_count_gate_refuses_oversized() {
        let mut cache = BoundedFrequencyCache::new(CacheConfig {
            max_entries: 100,
            ttl: Duration::from_secs(300),
            max_cacheable_results: 5,
        });
        let p = Map::new();

        let stored = cache.set("movies.search", &p, json!([1, 2, 3]), Some(10));

        assert!(!stored);
        assert_eq!(cache.get("movies.search", &p), None);
        assert_eq!(cache.stats().rejected, 1);
    }

    #[test]
    fn test_result_count_gate_admits_within_ceiling() {
        let mut cache = BoundedFrequencyCache::new(CacheConfig {
            max_entries: 100,
            ttl: Duration::from_secs(300),
            max_cacheable_results: 5,
        });
        let p = Map::new();

        assert!(cache.set("movies.search", &p, json!([1, 2, 3]), Some(3)));
        assert_eq!(cache.get("movies.search", &p), Some(json!([1, 2, 3])));
    }

    #[test]
    fn test_omitted_hint_is_always_cacheable() {
        let mut cache = BoundedFrequencyCache::new(CacheConfig {
            max_entries: 100,
            ttl: Duration::from_secs(300),
            max_cacheable_results: 0,
        });
        let p = Map::new();

        assert!(cache.set("movies.search", &p, json!([1, 2, 3]), None));
        assert_eq!(cache.get("movies.search", &p), Some(json!([1, 2, 3])));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut cache = BoundedFrequencyCache::new(test_config(100));

        cache.clear();
        assert_eq!(cache.stats().size, 0);

        cache.set("movies.search", &Map::new(), json!("v"), None);
        cache.clear();
        assert_eq!(cache.stats().size, 0);
        assert_eq!(cache.get("movies.search", &Map::new()), None);
    }

    #[test]
    fn test_purge_expired() {
        let mut cache = BoundedFrequencyCache::new(CacheConfig {
            max_entries: 100,
            ttl: Duration::from_millis(100),
            max_cacheable_results: 100,
        });

        cache.set("old", &Map::new(), json!(1), None);
        sleep(Duration::from_millis(150));
        cache.set("fresh", &Map::new(), json!(2), None);

        let removed = cache.purge_expired();

        assert_eq!(removed, 1);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("fresh", &Map::new()), Some(json!(2)));
    }

    #[test]
    fn test_stats_counters() {
        let mut cache = BoundedFrequencyCache::new(test_config(100));

        cache.set("x", &Map::new(), json!("v"), None);
        cache.get("x", &Map::new()); // hit
        cache.get("missing", &Map::new()); // miss

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.size, 1);
        assert_eq!(stats.max_size, 100);
    }

    #[test]
    fn test_expired_get_counts_as_miss() {
        let mut cache = BoundedFrequencyCache::new(CacheConfig {
            max_entries: 100,
            ttl: Duration::from_millis(50),
            max_cacheable_results: 100,
        });

        cache.set("x", &Map::new(), json!("v"), None);
        sleep(Duration::from_millis(100));

        assert_eq!(cache.get("x", &Map::new()), None);
        assert_eq!(cache.stats().misses, 1);
        assert_eq!(cache.stats().hits, 0);
    }
}
