//! View Module
//!
//! The panel's view model: cached entries, form input, the current error,
//! and the store that serializes every update to them.

mod entry;
mod render;
mod state;
mod store;


// Re-export public types
pub use entry::{CacheEntry, CacheSnapshot, Expiration};
pub use render::{render, KEYS_HEADING};
pub use state::{
    PendingInput, ValidSet, ViewEvent, ViewState, INVALID_KEY_INPUT, INVALID_SET_INPUT,
};
pub use store::ViewStore;

// == Public Constants ==
/// Largest TTL in seconds the service can hold as a nanosecond duration
pub const MAX_TTL_SECONDS: u64 = (i64::MAX / 1_000_000_000) as u64;
