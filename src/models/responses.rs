//! Response DTOs for the cache service API
//!
//! Defines the structure of incoming HTTP response bodies.

use serde::Deserialize;

use crate::view::CacheSnapshot;

/// Response body for the LIST operation (GET /cache)
///
/// The service answers an empty store with only an `error` field, which
/// decodes to an empty snapshot.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListResponse {
    /// Live keys with their expirations
    #[serde(default)]
    pub cache: CacheSnapshot,
    /// Informational message sent instead of `cache`
    #[serde(default)]
    pub error: Option<String>,
}

/// Error body returned with non-success statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_response_deserialize() {
        let json = r#"{"cache": {
            "a": {"key": "a", "expiration": "2024-03-01T10:00:00Z"},
            "b": {"key": "b", "expiration": 1709287205000}
        }}"#;
        let resp: ListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.cache.len(), 2);
        assert!(resp.cache["a"].expiration.is_some());
        assert!(resp.error.is_none());
    }

    #[test]
    fn test_list_response_without_cache_is_empty() {
        let resp: ListResponse = serde_json::from_str(r#"{"error": "no data present"}"#).unwrap();
        assert!(resp.cache.is_empty());
        assert_eq!(resp.error.as_deref(), Some("no data present"));
    }

    #[test]
    fn test_error_response_deserialize() {
        let resp: ErrorResponse = serde_json::from_str(r#"{"error": "no data found"}"#).unwrap();
        assert_eq!(resp.error, "no data found");
    }
}
