//! Error types for the cache service
//!
//! The cache core itself is total and surfaces no errors; these types
//! exist for the HTTP boundary only.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Cache Error Enum ==
/// Error type for the HTTP surface of the cache service.
#[derive(Error, Debug)]
pub enum CacheError {
    /// No live entry for the requested endpoint and parameters
    #[error("No cached response for endpoint: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
            CacheError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache service handlers.
pub type Result<T> = std::result::Result<T, CacheError>;
