//! View Store Module
//!
//! Shared owner of the `ViewState`. Writers dispatch events; renderers subscribe.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use tokio::sync::watch;
use tracing::debug;

use crate::view::{ViewEvent, ViewState};

// == View Store ==
/// Shared view model plus the lifecycle flag and snapshot sequence counter.
///
/// Writes are short and synchronous, so dispatching is safe from `Drop`.
#[derive(Debug)]
pub struct ViewStore {
    state: watch::Sender<ViewState>,
    active: AtomicBool,
    sequence: AtomicU64,
}

impl ViewStore {
    /// Creates an active store holding the mount-time state.
    pub fn new(default_ttl: u64) -> Self {
        let (state, _) = watch::channel(ViewState::new(default_ttl));
        Self {
            state,
            active: AtomicBool::new(true),
            sequence: AtomicU64::new(0),
        }
    }

    /// Returns a copy of the current state.
    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Subscribes to state changes.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    /// Applies `event` unless the view has been torn down.
    ///
    /// Subscribers are notified only when the event was applied.
    pub fn dispatch(&self, event: ViewEvent) -> bool {
        self.state.send_if_modified(|state| {
            if !self.active.load(Ordering::SeqCst) {
                debug!("view inactive, discarding {:?}", event);
                return false;
            }
            state.reduce(event)
        })
    }

    /// Allocates the sequence token for a list call about to be issued.
    pub fn next_sequence(&self) -> u64 {
        self.sequence.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// True until `deactivate` is called.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Marks the view as torn down. Later dispatches are discarded.
    ///
    /// Runs under the state lock so an update in progress finishes first.
    pub fn deactivate(&self) {
        self.state.send_if_modified(|_| {
            self.active.store(false, Ordering::SeqCst);
            false
        });
    }
}
