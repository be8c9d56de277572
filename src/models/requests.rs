//! Request DTOs for the cache service API
//!
//! Defines the structure of outgoing HTTP request bodies.

use serde::Serialize;

/// Request body for the SET operation (POST /cache)
///
/// # Fields
/// - `key`: The cache key to store
/// - `ttl`: Time-to-live in seconds, always positive
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetRequest {
    /// The cache key
    pub key: String,
    /// TTL in seconds
    pub ttl: u64,
}

impl SetRequest {
    /// Creates a new SetRequest
    pub fn new(key: impl Into<String>, ttl: u64) -> Self {
        Self {
            key: key.into(),
            ttl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_request_serialize() {
        let req = SetRequest::new("session", 5);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({"key": "session", "ttl": 5}));
    }
}
