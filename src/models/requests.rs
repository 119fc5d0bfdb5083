//! Request DTOs for the cache service API
//!
//! Defines the structure of incoming HTTP request bodies. Cache keys are
//! (endpoint, params) pairs, so both lookup and store take JSON bodies.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Request body for the lookup operation (POST /lookup)
///
/// # Fields
/// - `endpoint`: Caller-defined endpoint identifier (e.g. "movies.search")
/// - `params`: Parameter map; supply order does not affect the key
#[derive(Debug, Clone, Deserialize)]
pub struct LookupRequest {
    /// Endpoint identifier
    pub endpoint: String,
    /// Request parameters
    #[serde(default)]
    pub params: Map<String, Value>,
}

impl LookupRequest {
    /// Validates the request data.
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        validate_endpoint(&self.endpoint)
    }
}

/// Request body for the store operation (PUT /store)
///
/// # Fields
/// - `endpoint`: Caller-defined endpoint identifier
/// - `params`: Parameter map the response was fetched with
/// - `data`: The payload to cache, opaque to the service
/// - `result_count`: Optional hint of how many results `data` holds;
///   stores above the configured ceiling are refused
#[derive(Debug, Clone, Deserialize)]
pub struct StoreRequest {
    /// Endpoint identifier
    pub endpoint: String,
    /// Request parameters
    #[serde(default)]
    pub params: Map<String, Value>,
    /// Payload to cache
    pub data: Value,
    /// Optional result-count hint
    #[serde(default)]
    pub result_count: Option<usize>,
}

impl StoreRequest {
    /// Validates the request data.
    pub fn validate(&self) -> Option<String> {
        validate_endpoint(&self.endpoint)
    }
}

fn validate_endpoint(endpoint: &str) -> Option<String> {
    if endpoint.is_empty() {
        return Some("Endpoint cannot be empty".to_string());
    }
    if endpoint.len() > 256 {
        return Some("Endpoint exceeds maximum length of 256 characters".to_string());
    }
    None
}
