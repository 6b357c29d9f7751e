//! Response DTOs for the cache admin API
//!
//! Defines the structure of outgoing HTTP response bodies. Statistics are
//! served directly as [`CacheStats`](crate::cache::CacheStats).

use serde::Serialize;

/// Response body for POST /cache/contains
#[derive(Debug, Clone, Serialize)]
pub struct ContainsResponse {
    /// Fingerprint the request resolved to
    pub fingerprint: String,
    /// Whether a live entry exists
    pub cached: bool,
}

impl ContainsResponse {
    pub fn new(fingerprint: impl Into<String>, cached: bool) -> Self {
        Self {
            fingerprint: fingerprint.into(),
            cached,
        }
    }
}

/// Response body for POST /cache/invalidate
#[derive(Debug, Clone, Serialize)]
pub struct InvalidateResponse {
    /// Fingerprint the request resolved to
    pub fingerprint: String,
    /// Whether an entry was removed
    pub invalidated: bool,
}

impl InvalidateResponse {
    pub fn new(fingerprint: impl Into<String>, invalidated: bool) -> Self {
        Self {
            fingerprint: fingerprint.into(),
            invalidated,
        }
    }
}

/// Response body for bulk removals (POST /cache/cleanup, DELETE /cache)
#[derive(Debug, Clone, Serialize)]
pub struct RemovedResponse {
    /// Number of entries removed
    pub removed: usize,
}

impl RemovedResponse {
    pub fn new(removed: usize) -> Self {
        Self { removed }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
