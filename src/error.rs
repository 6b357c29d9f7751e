//! Error types for the chart cache
//!
//! Provides unified error handling using thiserror. Lookups never fail (absence is
//! an `Option`), and builder failures pass through untouched, so this enum only
//! covers configuration and request problems.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Cache Error Enum ==
/// Unified error type for the chart cache.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Capacity, TTL or sweep interval rejected at construction
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::InvalidConfig(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CacheError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the chart cache.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        let cases = vec![
            (CacheError::InvalidConfig("max_size".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (CacheError::InvalidRequest("bad".into()), StatusCode::BAD_REQUEST),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_error_display() {
        let err = CacheError::InvalidConfig("max_size must be greater than zero".into());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: max_size must be greater than zero"
        );
    }
}
