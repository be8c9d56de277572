//! Remote Cache Client Module
//!
//! Typed operations against the external cache service. Every call is a
//! single attempt with no retries; its outcome goes straight back to the caller.

mod http;

use async_trait::async_trait;

use crate::error::Result;
use crate::view::{CacheEntry, CacheSnapshot};

pub use http::HttpCacheClient;

/// Operations offered by the remote cache service.
#[async_trait]
pub trait CacheClient: Send + Sync {
    /// Lists every live key with its expiration.
    ///
    /// Fails with `Transport` on network or 5xx failure.
    async fn list(&self) -> Result<CacheSnapshot>;

    /// Fetches a single entry.
    ///
    /// Fails with `NotFound` if the key is absent or expired.
    async fn get(&self, key: &str) -> Result<CacheEntry>;

    /// Stores `key` for `ttl_seconds`.
    ///
    /// Fails with `Validation` if the service rejects the payload.
    async fn set(&self, key: &str, ttl_seconds: u64) -> Result<()>;

    /// Removes `key`. Removing an absent key succeeds.
    async fn delete(&self, key: &str) -> Result<()>;
}

#[cfg(test)]
pub(crate) mod mock;
