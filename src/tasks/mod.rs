//! Background Tasks Module
//!
//! Contains background tasks that run while the panel is mounted.
//!
//! # Tasks
//! - Poller: refreshes the displayed snapshot at a fixed period

mod poller;

pub use poller::{refresh, spawn_poller};
