//! Request and Response models for the cache service API
//!
//! This module defines the DTOs (Data Transfer Objects) exchanged with the
//! remote cache service.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::SetRequest;
pub use responses::{ErrorResponse, ListResponse};
