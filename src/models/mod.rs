//! Domain types and HTTP models
//!
//! Profiles and charts consumed by the cache, plus the DTOs used for
//! serializing/deserializing the admin API bodies.

pub mod profile;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use profile::{mark_cached, Chart, Profile};
pub use requests::ChartKeyRequest;
pub use responses::{
    ContainsResponse, ErrorResponse, HealthResponse, InvalidateResponse, RemovedResponse,
};
