//! Cache Panel - operator control panel for a remote TTL cache service
//!
//! Keeps a live, polled view of the service's keys and runs set, get and
//! delete commands against it, folding every outcome into one view state.

pub mod client;
pub mod config;
pub mod console;
pub mod dispatcher;
pub mod error;
pub mod models;
pub mod panel;
pub mod tasks;
pub mod view;

pub use client::{CacheClient, HttpCacheClient};
pub use config::Config;
pub use dispatcher::CommandDispatcher;
pub use panel::Panel;
