//! HTTP implementation of `CacheClient` on top of reqwest.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use tracing::{debug, warn};

use crate::client::CacheClient;
use crate::config::DEFAULT_SERVICE_URL;
use crate::error::{ClientError, Result};
use crate::models::{ErrorResponse, ListResponse, SetRequest};
use crate::view::{CacheEntry, CacheSnapshot};

/// Client for the cache service REST API.
#[derive(Debug, Clone)]
pub struct HttpCacheClient {
    /// Base URL without trailing slash
    base_url: String,
    /// Reusable HTTP client
    client: Client,
}

impl HttpCacheClient {
    /// Creates a client for the service at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: Client::new(),
        }
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/cache", self.base_url)
    }

    fn key_url(&self, key: &str) -> String {
        format!("{}/cache/{}", self.base_url, urlencoding::encode(key))
    }
}

impl Default for HttpCacheClient {
    fn default() -> Self {
        Self::new(DEFAULT_SERVICE_URL)
    }
}

/// Reads the service's error message, falling back to the raw body.
async fn error_message(response: Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    serde_json::from_str::<ErrorResponse>(&body)
        .map(|e| e.error)
        .ok()
        .filter(|msg| !msg.is_empty())
        .unwrap_or_else(|| {
            if body.is_empty() {
                status.to_string()
            } else {
                body
            }
        })
}

/// Maps a non-success status: 5xx is a transport failure, anything else an
/// operation failure.
async fn common_failure(response: Response) -> ClientError {
    let status = response.status();
    let message = error_message(response).await;
    if status.is_server_error() {
        ClientError::Transport(format!("{}: {}", status, message))
    } else {
        ClientError::Operation {
            status: status.as_u16(),
            message,
        }
    }
}

#[async_trait]
impl CacheClient for HttpCacheClient {
    async fn list(&self) -> Result<CacheSnapshot> {
        let response = self.client.get(self.collection_url()).send().await?;

        if !response.status().is_success() {
            return Err(common_failure(response).await);
        }

        let body: ListResponse = response.json().await.map_err(|e| {
            warn!("list body could not be decoded: {}", e);
            ClientError::InvalidResponse(e.to_string())
        })?;
        if let Some(note) = &body.error {
            debug!("list returned no cache: {}", note);
        }
        Ok(body.cache)
    }

    async fn get(&self, key: &str) -> Result<CacheEntry> {
        let response = self.client.get(self.key_url(key)).send().await?;

        match response.status() {
            status if status.is_success() => response
                .json()
                .await
                .map_err(|e| ClientError::InvalidResponse(e.to_string())),
            StatusCode::NOT_FOUND => Err(ClientError::NotFound(key.to_string())),
            _ => Err(common_failure(response).await),
        }
    }

    async fn set(&self, key: &str, ttl_seconds: u64) -> Result<()> {
        let response = self
            .client
            .post(self.collection_url())
            .json(&SetRequest::new(key, ttl_seconds))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else if status.is_client_error() {
            Err(ClientError::Validation(error_message(response).await))
        } else {
            Err(common_failure(response).await)
        }
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let response = self.client.delete(self.key_url(key)).send().await?;

        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::NOT_FOUND => {
                debug!("delete of absent key '{}' treated as success", key);
                Ok(())
            }
            _ => Err(common_failure(response).await),
        }
    }
}
