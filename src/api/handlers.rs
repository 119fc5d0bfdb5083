//! API Handlers
//!
//! HTTP request handlers for each cache service endpoint.

use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, Json};
use tokio::sync::RwLock;

use crate::cache::{BoundedFrequencyCache, CacheConfig};
use crate::error::{CacheError, Result};
use crate::models::{
    ClearResponse, HealthResponse, LookupRequest, LookupResponse, StatsResponse, StoreRequest,
    StoreResponse,
};

/// Application state shared across all handlers.
///
/// The cache is an explicitly constructed, explicitly owned object behind
/// a single lock; `get`'s count increment, `set`'s evict-then-insert, and
/// the sweep's delete-many are compound read-modify-write sequences, so
/// each runs under the write lock.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe cache
    pub cache: Arc<RwLock<BoundedFrequencyCache>>,
}

impl AppState {
    /// Creates a new AppState owning the given cache.
    pub fn new(cache: BoundedFrequencyCache) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    /// Creates a new AppState from service configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        let cache = BoundedFrequencyCache::new(CacheConfig {
            max_entries: config.max_entries,
            ttl: Duration::from_secs(config.ttl_secs),
            max_cacheable_results: config.max_cacheable_results,
        });
        Self::new(cache)
    }
}

/// Handler for POST /lookup
///
/// Looks up a cached response by endpoint and parameter set.
/// A miss (absent or expired entry) maps to 404.
pub async fn lookup_handler(
    State(state): State<AppState>,
    Json(req): Json<LookupRequest>,
) -> Result<Json<LookupResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    // Write lock: a hit increments the entry's access count
    let mut cache = state.cache.write().await;
    match cache.get(&req.endpoint, &req.params) {
        Some(data) => Ok(Json(LookupResponse::new(req.endpoint, data))),
        None => Err(CacheError::NotFound(req.endpoint)),
    }
}

/// Handler for PUT /store
///
/// Caches a response for an endpoint and parameter set. A store refused
/// by the result-count gate still returns 200 with `cached: false` —
/// failure to cache is never an application error.
pub async fn store_handler(
    State(state): State<AppState>,
    Json(req): Json<StoreRequest>,
) -> Result<Json<StoreResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let mut cache = state.cache.write().await;
    let cached = cache.set(&req.endpoint, &req.params, req.data, req.result_count);

    Ok(Json(StoreResponse::new(req.endpoint, cached)))
}

/// Handler for POST /clear
///
/// Drops all cached entries.
pub async fn clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let mut cache = state.cache.write().await;
    cache.clear();

    Json(ClearResponse::new())
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    // Read lock suffices: stats is a side-effect-free snapshot
    let cache = state.cache.read().await;
    let stats = cache.stats();

    Json(StatsResponse::new(&stats))
}

/// Handler for GET /health
///
/// Returns health status of the service.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
