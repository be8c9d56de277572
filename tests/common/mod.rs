//! In-memory stand-in for the cache service, served over real HTTP.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use serde_json::json;
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
struct FakeEntry {
    value: String,
    expires_at: DateTime<Utc>,
}

/// Shared state of the fake service.
#[derive(Clone, Default)]
pub struct FakeService {
    entries: Arc<RwLock<HashMap<String, FakeEntry>>>,
}

#[derive(Debug, Deserialize)]
struct SetBody {
    key: String,
    #[serde(default)]
    value: String,
    ttl: i64,
}

impl FakeService {
    /// Number of stored entries, expired ones included.
    pub async fn stored(&self) -> usize {
        self.entries.read().await.len()
    }
}

async fn list_handler(State(service): State<FakeService>) -> Response {
    let now = Utc::now();
    let entries = service.entries.read().await;
    let live: serde_json::Map<String, serde_json::Value> = entries
        .iter()
        .filter(|(_, entry)| entry.expires_at > now)
        .map(|(key, entry)| {
            (
                key.clone(),
                json!({ "key": key, "expiration": entry.expires_at.to_rfc3339() }),
            )
        })
        .collect();

    if live.is_empty() {
        Json(json!({ "error": "no data present" })).into_response()
    } else {
        Json(json!({ "cache": live })).into_response()
    }
}

async fn get_handler(State(service): State<FakeService>, Path(key): Path<String>) -> Response {
    let entries = service.entries.read().await;
    match entries.get(&key) {
        Some(entry) if entry.expires_at > Utc::now() => {
            Json(json!({ "value": entry.value })).into_response()
        }
        _ => (StatusCode::NOT_FOUND, Json(json!({ "error": "no data found" }))).into_response(),
    }
}

async fn set_handler(State(service): State<FakeService>, Json(body): Json<SetBody>) -> Response {
    if body.key.is_empty() || body.ttl <= 0 {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": "invalid key or ttl" })))
            .into_response();
    }
    let entry = FakeEntry {
        value: body.value,
        expires_at: Utc::now() + Duration::seconds(body.ttl),
    };
    service.entries.write().await.insert(body.key, entry);
    Json(json!({ "status": "ok" })).into_response()
}

async fn delete_handler(State(service): State<FakeService>, Path(key): Path<String>) -> Response {
    service.entries.write().await.remove(&key);
    Json(json!({ "status": "ok" })).into_response()
}

/// Starts the fake service on an ephemeral port and returns it with its base URL.
pub async fn spawn_fake_service() -> (FakeService, String) {
    let service = FakeService::default();
    let app = Router::new()
        .route("/cache", get(list_handler).post(set_handler))
        .route("/cache/:key", get(get_handler).delete(delete_handler))
        .with_state(service.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (service, format!("http://{}", addr))
}
