//! Panel Lifecycle
//!
//! Ties the store, dispatcher and poller together for as long as the view is
//! mounted.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::info;

use crate::client::CacheClient;
use crate::config::Config;
use crate::dispatcher::CommandDispatcher;
use crate::tasks::spawn_poller;
use crate::view::{ViewEvent, ViewState, ViewStore};

/// A mounted cache view.
///
/// Must be created inside a tokio runtime. Dropping it unmounts it.
pub struct Panel {
    store: Arc<ViewStore>,
    dispatcher: CommandDispatcher,
    poller: Option<JoinHandle<()>>,
}

impl Panel {
    /// Mounts the view: empty snapshot, default form, polling started.
    pub fn mount(client: Arc<dyn CacheClient>, config: &Config) -> Self {
        let store = Arc::new(ViewStore::new(config.default_ttl));
        let dispatcher = CommandDispatcher::new(client.clone(), store.clone());
        let poller = spawn_poller(client, store.clone(), config.poll_interval());
        info!("Panel mounted, polling every {:?}", config.poll_interval());

        Self {
            store,
            dispatcher,
            poller: Some(poller),
        }
    }

    /// Tears the view down. No poll fires and no result is applied afterwards.
    pub fn unmount(&mut self) {
        if let Some(poller) = self.poller.take() {
            self.store.deactivate();
            poller.abort();
            info!("Panel unmounted");
        }
    }

    /// True between mount and unmount.
    pub fn is_mounted(&self) -> bool {
        self.poller.is_some()
    }

    /// Returns a copy of the current view state.
    pub fn state(&self) -> ViewState {
        self.store.state()
    }

    /// Subscribes to view state changes for re-rendering.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.store.subscribe()
    }

    /// Records a keystroke in the key field.
    pub fn edit_key(&self, key: impl Into<String>) {
        self.store.dispatch(ViewEvent::KeyEdited(key.into()));
    }

    /// Records a keystroke in the TTL field.
    pub fn edit_ttl(&self, ttl: impl Into<String>) {
        self.store.dispatch(ViewEvent::TtlEdited(ttl.into()));
    }

    /// The command dispatcher bound to this view.
    pub fn dispatcher(&self) -> &CommandDispatcher {
        &self.dispatcher
    }
}

impl Drop for Panel {
    fn drop(&mut self) {
        self.unmount();
    }
}
