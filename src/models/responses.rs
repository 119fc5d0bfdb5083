//! Response DTOs for the cache service API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;
use serde_json::Value;

/// Response body for the lookup operation (POST /lookup)
#[derive(Debug, Clone, Serialize)]
pub struct LookupResponse {
    /// The requested endpoint
    pub endpoint: String,
    /// The cached payload
    pub data: Value,
}

impl LookupResponse {
    /// Creates a new LookupResponse
    pub fn new(endpoint: impl Into<String>, data: Value) -> Self {
        Self {
            endpoint: endpoint.into(),
            data,
        }
    }
}

/// Response body for the store operation (PUT /store)
#[derive(Debug, Clone, Serialize)]
pub struct StoreResponse {
    /// Outcome message
    pub message: String,
    /// Whether the payload was actually cached; false when the
    /// result-count gate refused it
    pub cached: bool,
}

impl StoreResponse {
    /// Creates a new StoreResponse
    pub fn new(endpoint: impl Into<String>, cached: bool) -> Self {
        let endpoint = endpoint.into();
        let message = if cached {
            format!("Response for '{}' cached successfully", endpoint)
        } else {
            format!("Response for '{}' not cached: result count above ceiling", endpoint)
        };
        Self { message, cached }
    }
}

/// Response body for the clear operation (POST /clear)
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    /// Success message
    pub message: String,
}

impl ClearResponse {
    /// Creates a new ClearResponse
    pub fn new() -> Self {
        Self {
            message: "Cache cleared".to_string(),
        }
    }
}

impl Default for ClearResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of entries evicted by the frequency policy
    pub evictions: u64,
    /// Number of stores refused by the result-count gate
    pub rejected: u64,
    /// Current number of live entries
    pub size: usize,
    /// Configured maximum number of entries
    pub max_size: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from a cache stats snapshot
    pub fn new(stats: &crate::cache::CacheStats) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            rejected: stats.rejected,
            size: stats.size,
            max_size: stats.max_size,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
