//! Cache Key Module
//!
//! Derives canonical lookup keys from an endpoint identifier and a
//! parameter map. Two calls with the same endpoint and the same parameter
//! set produce the same key regardless of the order parameters were
//! supplied in.

use serde_json::{Map, Value};

// == Key Derivation ==
/// Builds the canonical cache key `"<endpoint>:<canonical-params>"`.
///
/// Parameters are canonicalized before serialization: object keys are
/// sorted lexicographically at every nesting level, array order is
/// preserved, and scalars serialize as-is. Serialization of a
/// `serde_json::Value` is total, so key derivation cannot fail.
///
/// # Arguments
/// * `endpoint` - Caller-defined endpoint identifier (e.g. "movies.search")
/// * `params` - Parameter map for the request being cached
pub fn derive_key(endpoint: &str, params: &Map<String, Value>) -> String {
    let canonical = canonicalize(&Value::Object(params.clone()));
    format!("{}:{}", endpoint, canonical)
}

// == Canonicalization ==
/// Serializes a JSON value with object keys sorted at every nesting level.
///
/// Array element order is significant and preserved.
fn canonicalize(value: &Value) -> String {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            let fields: Vec<String> = keys
                .into_iter()
                .map(|k| {
                    format!(
                        "{}:{}",
                        serde_json::to_string(k).unwrap_or_default(),
                        canonicalize(&map[k])
                    )
                })
                .collect();
            format!("{{{}}}", fields.join(","))
        }
        Value::Array(items) => {
            let elements: Vec<String> = items.iter().map(canonicalize).collect();
            format!("[{}]", elements.join(","))
        }
        scalar => serde_json::to_string(scalar).unwrap_or_default(),
    }
}
