//! View State Module
//!
//! The in-memory view model of the panel and the pure transitions that update it.

use crate::error::ViewError;
use crate::view::{CacheSnapshot, MAX_TTL_SECONDS};

/// Shown when a Set is attempted with an empty key or a non-positive TTL
pub const INVALID_SET_INPUT: &str = "Please enter a valid Key and TTL";

/// Shown when a Get or Delete is attempted with an empty key
pub const INVALID_KEY_INPUT: &str = "Please enter a valid Key";

// == Pending Input ==
/// The operator's in-progress form values.
///
/// The TTL is kept as typed so malformed input can be reported instead of lost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingInput {
    pub key: String,
    pub ttl: String,
}

/// A Set request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSet {
    pub key: String,
    pub ttl: u64,
}

impl PendingInput {
    /// Creates empty form values with the given TTL.
    pub fn new(default_ttl: u64) -> Self {
        Self {
            key: String::new(),
            ttl: default_ttl.to_string(),
        }
    }

    /// Checks the form for a Set: non-blank key and a TTL in `1..=MAX_TTL_SECONDS`.
    pub fn validate_set(&self) -> Result<ValidSet, ViewError> {
        let key = self.key.trim();
        let ttl = self.ttl.trim().parse::<u64>().ok();

        match ttl {
            Some(ttl) if !key.is_empty() && (1..=MAX_TTL_SECONDS).contains(&ttl) => Ok(ValidSet {
                key: key.to_string(),
                ttl,
            }),
            _ => Err(ViewError::Validation(INVALID_SET_INPUT.to_string())),
        }
    }

    /// Checks the form for a Get or Delete: non-blank key.
    pub fn validate_key(&self) -> Result<String, ViewError> {
        let key = self.key.trim();
        if key.is_empty() {
            return Err(ViewError::Validation(INVALID_KEY_INPUT.to_string()));
        }
        Ok(key.to_string())
    }
}

// == View Events ==
/// Everything that may change the view state.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    /// A list response arrived; `sequence` orders it against other responses
    SnapshotReceived {
        sequence: u64,
        snapshot: CacheSnapshot,
    },
    /// Operator typed into the key field
    KeyEdited(String),
    /// Operator typed into the TTL field
    TtlEdited(String),
    /// A command completed successfully
    CommandSucceeded,
    /// A command failed
    CommandFailed(ViewError),
    /// Form values return to their defaults
    InputReset,
}

// == View State ==
/// Single authoritative snapshot of what the panel displays.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Last applied list response
    pub snapshot: CacheSnapshot,
    /// Form values
    pub input: PendingInput,
    /// Error shown next to the form
    pub error: Option<ViewError>,
    /// Sequence token of the applied snapshot; 0 before the first one
    pub applied_sequence: u64,
    defaults: PendingInput,
}

impl ViewState {
    /// Creates the mount-time state: empty snapshot, default form, no error.
    pub fn new(default_ttl: u64) -> Self {
        let defaults = PendingInput::new(default_ttl);
        Self {
            snapshot: CacheSnapshot::new(),
            input: defaults.clone(),
            error: None,
            applied_sequence: 0,
            defaults,
        }
    }

    /// True iff there is at least one key to show.
    pub fn is_visible(&self) -> bool {
        !self.snapshot.is_empty()
    }

    /// Form values restored by `InputReset`.
    pub fn default_input(&self) -> &PendingInput {
        &self.defaults
    }

    /// Applies `event` and reports whether it was applied.
    ///
    /// Snapshots older than the applied one are rejected. Snapshots never touch
    /// the error or the form.
    pub fn reduce(&mut self, event: ViewEvent) -> bool {
        match event {
            ViewEvent::SnapshotReceived { sequence, snapshot } => {
                if sequence <= self.applied_sequence {
                    return false;
                }
                self.applied_sequence = sequence;
                self.snapshot = snapshot;
                true
            }
            ViewEvent::KeyEdited(key) => {
                self.input.key = key;
                true
            }
            ViewEvent::TtlEdited(ttl) => {
                self.input.ttl = ttl;
                true
            }
            ViewEvent::CommandSucceeded => self.error.take().is_some(),
            ViewEvent::CommandFailed(error) => {
                self.error = Some(error);
                true
            }
            ViewEvent::InputReset => {
                if self.input == self.defaults {
                    return false;
                }
                self.input = self.defaults.clone();
                true
            }
        }
    }
}
