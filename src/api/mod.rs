//! API Module
//!
//! HTTP handlers and routing for the cache service REST API.
//!
//! # Endpoints
//! - `POST /lookup` - Look up a cached response by endpoint and params
//! - `PUT /store` - Cache a response, subject to the result-count gate
//! - `POST /clear` - Drop all cached entries
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
