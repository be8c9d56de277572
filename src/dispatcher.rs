//! Command Dispatcher
//!
//! Runs the operator's Set, Get and Delete commands against the cache service
//! and records each outcome in the view store.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::client::CacheClient;
use crate::error::{ClientError, ViewError};
use crate::tasks::refresh;
use crate::view::{CacheEntry, ViewEvent, ViewStore};

/// Shown when the service fails a Set
pub const SET_FAILED: &str = "Error setting key";

/// Shown when a Get finds nothing
pub const KEY_NOT_FOUND: &str = "Key not found";

/// Shown when a Get fails for any reason other than a missing key.
///
/// Departs from the original panel, which showed "Key not found" for every
/// Get failure.
pub const GET_FAILED: &str = "Error fetching key";

/// Shown when the service fails a Delete
pub const DELETE_FAILED: &str = "Error deleting key";

// == Input Reset Guard ==
/// Resets the form when dropped, on every exit path of a command.
struct InputResetGuard<'a> {
    store: &'a ViewStore,
}

impl<'a> InputResetGuard<'a> {
    fn new(store: &'a ViewStore) -> Self {
        Self { store }
    }
}

impl Drop for InputResetGuard<'_> {
    fn drop(&mut self) {
        self.store.dispatch(ViewEvent::InputReset);
    }
}

// == Command Dispatcher ==
/// Issues commands one at a time and turns their outcomes into the view's error.
pub struct CommandDispatcher {
    client: Arc<dyn CacheClient>,
    store: Arc<ViewStore>,
    /// Held for the whole of a command so outcomes land in issue order
    in_flight: Mutex<()>,
}

impl CommandDispatcher {
    /// Creates a dispatcher writing to `store`.
    pub fn new(client: Arc<dyn CacheClient>, store: Arc<ViewStore>) -> Self {
        Self {
            client,
            store,
            in_flight: Mutex::new(()),
        }
    }

    fn fail(&self, error: ViewError) -> ViewError {
        self.store.dispatch(ViewEvent::CommandFailed(error.clone()));
        error
    }

    // == Set ==
    /// Stores the form's key for the form's TTL.
    ///
    /// Invalid input is reported without contacting the service and leaves the
    /// form as typed. Otherwise the form is reset whatever the outcome, and a
    /// success refreshes the snapshot before returning.
    pub async fn set(&self) -> Result<(), ViewError> {
        let _serial = self.in_flight.lock().await;

        let request = match self.store.state().input.validate_set() {
            Ok(request) => request,
            Err(e) => return Err(self.fail(e)),
        };
        let _reset = InputResetGuard::new(&self.store);

        match self.client.set(&request.key, request.ttl).await {
            Ok(()) => {
                info!("Set '{}' with ttl {}s", request.key, request.ttl);
                self.store.dispatch(ViewEvent::CommandSucceeded);
                refresh(self.client.as_ref(), &self.store).await;
                Ok(())
            }
            Err(e) => {
                warn!("Set '{}' failed: {}", request.key, e);
                Err(self.fail(ViewError::Operation(SET_FAILED.to_string())))
            }
        }
    }

    // == Get ==
    /// Looks up the form's key and returns the entry.
    ///
    /// The entry is handed to the caller only; the displayed snapshot is not
    /// touched. The form is reset on every path, including invalid input.
    pub async fn get(&self) -> Result<CacheEntry, ViewError> {
        let _serial = self.in_flight.lock().await;
        let _reset = InputResetGuard::new(&self.store);

        let key = match self.store.state().input.validate_key() {
            Ok(key) => key,
            Err(e) => return Err(self.fail(e)),
        };

        match self.client.get(&key).await {
            Ok(entry) => {
                info!("Get '{}' found", key);
                self.store.dispatch(ViewEvent::CommandSucceeded);
                Ok(entry)
            }
            Err(ClientError::NotFound(_)) => {
                info!("Get '{}' not found", key);
                Err(self.fail(ViewError::NotFound(KEY_NOT_FOUND.to_string())))
            }
            Err(e) => {
                warn!("Get '{}' failed: {}", key, e);
                Err(self.fail(ViewError::Transport(GET_FAILED.to_string())))
            }
        }
    }

    // == Delete ==
    /// Removes the form's key. Removing an absent key is a success.
    ///
    /// The form is reset on every path, including invalid input.
    pub async fn delete(&self) -> Result<(), ViewError> {
        let _serial = self.in_flight.lock().await;
        let _reset = InputResetGuard::new(&self.store);

        let key = match self.store.state().input.validate_key() {
            Ok(key) => key,
            Err(e) => return Err(self.fail(e)),
        };

        match self.client.delete(&key).await {
            Ok(()) => {
                info!("Deleted '{}'", key);
                self.store.dispatch(ViewEvent::CommandSucceeded);
                refresh(self.client.as_ref(), &self.store).await;
                Ok(())
            }
            Err(e) => {
                warn!("Delete '{}' failed: {}", key, e);
                Err(self.fail(ViewError::Operation(DELETE_FAILED.to_string())))
            }
        }
    }
}
