//! Snapshot Poller
//!
//! Background task that keeps the displayed snapshot close to the service's.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::client::CacheClient;
use crate::view::{ViewEvent, ViewStore};

/// Fetches the service's key list once and publishes it to the store.
///
/// The sequence token is taken before the call is issued, so a response that
/// arrives after a newer one has been applied is discarded. Failures are only
/// logged; they never become the view's error.
///
/// Returns true if the response was applied.
pub async fn refresh(client: &dyn CacheClient, store: &ViewStore) -> bool {
    let sequence = store.next_sequence();

    match client.list().await {
        Ok(snapshot) => {
            let keys = snapshot.len();
            let applied = store.dispatch(ViewEvent::SnapshotReceived { sequence, snapshot });
            if applied {
                debug!("Poll #{}: applied snapshot with {} keys", sequence, keys);
            } else {
                debug!("Poll #{}: discarded stale or late snapshot", sequence);
            }
            applied
        }
        Err(e) => {
            warn!("Poll #{} failed: {}", sequence, e);
            false
        }
    }
}

/// Spawns the background task that refreshes the snapshot every `interval`.
///
/// The first refresh is issued immediately. Every tick issues its own list
/// call even if earlier ones are still in flight.
///
/// # Returns
/// A JoinHandle for the ticking loop; aborting it stops further polls.
///
/// # Example
/// ```ignore
/// let store = Arc::new(ViewStore::new(5));
/// let poller = spawn_poller(client, store.clone(), Duration::from_secs(1));
/// // Later, on unmount:
/// store.deactivate();
/// poller.abort();
/// ```
pub fn spawn_poller(
    client: Arc<dyn CacheClient>,
    store: Arc<ViewStore>,
    interval: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Starting poller with interval of {:?}", interval);

        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            if !store.is_active() {
                info!("View inactive, stopping poller");
                break;
            }

            let client = client.clone();
            let store = store.clone();
            tokio::spawn(async move {
                refresh(client.as_ref(), &store).await;
            });
        }
    })
}
