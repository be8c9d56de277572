//! Scripted in-memory `CacheClient` for unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;

use crate::client::CacheClient;
use crate::error::{ClientError, Result};
use crate::view::{CacheEntry, CacheSnapshot};

/// A list response to hand out once, after `delay`.
pub struct ScriptedList {
    pub delay: Duration,
    pub result: Result<CacheSnapshot>,
}

/// Behaves like the cache service over an in-memory map and records every call.
#[derive(Default)]
pub struct MockCacheClient {
    pub entries: Mutex<CacheSnapshot>,
    pub calls: Mutex<Vec<String>>,
    pub scripted_lists: Mutex<VecDeque<ScriptedList>>,
    pub list_error: Mutex<Option<ClientError>>,
    pub get_error: Mutex<Option<ClientError>>,
    pub set_error: Mutex<Option<ClientError>>,
    pub delete_error: Mutex<Option<ClientError>>,
    pub set_delay: Mutex<Option<Duration>>,
    pub delete_delay: Mutex<Option<Duration>>,
}

impl MockCacheClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key(self, key: &str, ttl_seconds: i64) -> Self {
        let expiration = Utc::now() + chrono::Duration::seconds(ttl_seconds);
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), CacheEntry::expiring_at(expiration.into()));
        self
    }

    pub fn script_list(&self, delay: Duration, result: Result<CacheSnapshot>) {
        self.scripted_lists
            .lock()
            .unwrap()
            .push_back(ScriptedList { delay, result });
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, op: &str) -> usize {
        self.calls()
            .iter()
            .filter(|call| call.split(' ').next() == Some(op))
            .count()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl CacheClient for MockCacheClient {
    async fn list(&self) -> Result<CacheSnapshot> {
        self.record("list".to_string());
        let scripted = self.scripted_lists.lock().unwrap().pop_front();
        if let Some(scripted) = scripted {
            tokio::time::sleep(scripted.delay).await;
            return scripted.result;
        }
        if let Some(err) = self.list_error.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(self.entries.lock().unwrap().clone())
    }

    async fn get(&self, key: &str) -> Result<CacheEntry> {
        self.record(format!("get {}", key));
        if let Some(err) = self.get_error.lock().unwrap().clone() {
            return Err(err);
        }
        let entry = self.entries.lock().unwrap().get(key).cloned();
        entry.ok_or_else(|| ClientError::NotFound(key.to_string()))
    }

    async fn set(&self, key: &str, ttl_seconds: u64) -> Result<()> {
        self.record(format!("set {} {}", key, ttl_seconds));
        let delay = *self.set_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(err) = self.set_error.lock().unwrap().clone() {
            return Err(err);
        }
        let expiration = Utc::now() + chrono::Duration::seconds(ttl_seconds as i64);
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), CacheEntry::expiring_at(expiration.into()));
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.record(format!("delete {}", key));
        let delay = *self.delete_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(err) = self.delete_error.lock().unwrap().clone() {
            return Err(err);
        }
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}
