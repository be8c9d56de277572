//! Cache Entry Module
//!
//! Read-only copies of the entries held by the remote cache service.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Full set of live keys as last reported by the service, ordered by key.
pub type CacheSnapshot = BTreeMap<String, CacheEntry>;

// == Cache Entry ==
/// A single entry as reported by the cache service.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CacheEntry {
    /// The stored value; the list endpoint omits it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
    /// Absolute expiration time; the lookup endpoint may omit it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration: Option<Expiration>,
}

impl CacheEntry {
    /// Creates an entry that only carries an expiration, as listed by the service.
    pub fn expiring_at(expiration: Expiration) -> Self {
        Self {
            value: None,
            expiration: Some(expiration),
        }
    }
}

// == Expiration ==
/// Absolute expiration timestamp.
///
/// Decodes from epoch milliseconds (number or numeric string) or ISO 8601 text.
/// Text without an offset is read as UTC, and a bare date as midnight UTC.
/// Encodes as RFC 3339.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawExpiration", into = "String")]
pub struct Expiration(DateTime<Utc>);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawExpiration {
    Millis(i64),
    Fractional(f64),
    Text(String),
}

impl Expiration {
    /// Builds an expiration from epoch milliseconds.
    pub fn from_millis(millis: i64) -> Option<Self> {
        DateTime::<Utc>::from_timestamp_millis(millis).map(Self)
    }

    /// Parses epoch-millisecond or ISO-8601 text.
    pub fn parse(text: &str) -> Result<Self, String> {
        let text = text.trim();
        if let Ok(millis) = text.parse::<i64>() {
            return Self::from_millis(millis)
                .ok_or_else(|| format!("expiration out of range: {}", millis));
        }
        if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
            return Ok(Self(parsed.with_timezone(&Utc)));
        }
        // ISO 8601 also allows offsets without a colon, e.g. `+0200`
        if let Ok(parsed) = DateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f%z") {
            return Ok(Self(parsed.with_timezone(&Utc)));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
            return Ok(Self(naive.and_utc()));
        }
        NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .map(|date| Self(date.and_time(NaiveTime::MIN).and_utc()))
            .map_err(|e| format!("invalid expiration '{}': {}", text, e))
    }

    /// Returns the timestamp in UTC.
    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// True if this expiration lies strictly after `instant`.
    pub fn is_after(&self, instant: DateTime<Utc>) -> bool {
        self.0 > instant
    }

    /// Formats the timestamp in the operator's local time zone.
    pub fn to_local_string(&self) -> String {
        self.0
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
    }
}

impl From<DateTime<Utc>> for Expiration {
    fn from(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }
}

impl From<Expiration> for String {
    fn from(expiration: Expiration) -> Self {
        expiration.0.to_rfc3339()
    }
}

impl TryFrom<RawExpiration> for Expiration {
    type Error = String;

    fn try_from(raw: RawExpiration) -> Result<Self, Self::Error> {
        match raw {
            RawExpiration::Millis(millis) => Self::from_millis(millis)
                .ok_or_else(|| format!("expiration out of range: {}", millis)),
            RawExpiration::Fractional(millis) => Self::from_millis(millis as i64)
                .ok_or_else(|| format!("expiration out of range: {}", millis)),
            RawExpiration::Text(text) => Self::parse(&text),
        }
    }
}

impl fmt::Display for Expiration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_local_string())
    }
}
