//! API Handlers
//!
//! HTTP request handlers for the cache administration endpoints.

use axum::{extract::State, Json};

use crate::cache::{fingerprint, CacheStats, SharedChartCache};
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{
    ChartKeyRequest, ContainsResponse, HealthResponse, InvalidateResponse, RemovedResponse,
};

/// Application state shared across all handlers.
///
/// Holds the single chart cache built by the composition root.
#[derive(Clone)]
pub struct AppState {
    pub cache: SharedChartCache,
}

impl AppState {
    /// Creates a new AppState around an existing cache handle.
    pub fn new(cache: SharedChartCache) -> Self {
        Self { cache }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Fails if the configured capacity or TTL is zero.
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache = SharedChartCache::with_limits(config.max_size, config.ttl_seconds)?;
        Ok(Self::new(cache))
    }
}

/// Handler for GET /cache/stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<CacheStats> {
    Json(state.cache.stats().await)
}

/// Handler for POST /cache/contains
///
/// Reports whether a live chart exists for the profile and chart type.
pub async fn contains_handler(
    State(state): State<AppState>,
    Json(req): Json<ChartKeyRequest>,
) -> Result<Json<ContainsResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let cached = state.cache.contains(&req.profile, &req.chart_type).await;
    let key = fingerprint(&req.profile, &req.chart_type);

    Ok(Json(ContainsResponse::new(key, cached)))
}

/// Handler for POST /cache/invalidate
pub async fn invalidate_handler(
    State(state): State<AppState>,
    Json(req): Json<ChartKeyRequest>,
) -> Result<Json<InvalidateResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let invalidated = state.cache.invalidate(&req.profile, &req.chart_type).await;
    let key = fingerprint(&req.profile, &req.chart_type);

    Ok(Json(InvalidateResponse::new(key, invalidated)))
}

/// Handler for POST /cache/cleanup
///
/// Runs an expiry sweep immediately.
pub async fn cleanup_handler(State(state): State<AppState>) -> Json<RemovedResponse> {
    Json(RemovedResponse::new(state.cache.cleanup_expired().await))
}

/// Handler for DELETE /cache
pub async fn clear_handler(State(state): State<AppState>) -> Json<RemovedResponse> {
    let removed = state.cache.clear().await;
    tracing::info!("Chart cache cleared: {} entries removed", removed);
    Json(RemovedResponse::new(removed))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Profile;
    use serde_json::json;

    fn test_state() -> AppState {
        AppState::from_config(&Config::default()).unwrap()
    }

    fn natal_request() -> ChartKeyRequest {
        ChartKeyRequest {
            profile: Profile::new("1990-05-15").with_location(40.7128, -74.0060),
            chart_type: "natal".to_string(),
        }
    }

    #[tokio::test]
    async fn test_from_config_rejects_zero_size() {
        let config = Config {
            max_size: 0,
            ..Config::default()
        };
        assert!(AppState::from_config(&config).is_err());
    }

    #[tokio::test]
    async fn test_contains_handler() {
        let state = test_state();
        let req = natal_request();

        let response = contains_handler(State(state.clone()), Json(req.clone()))
            .await
            .unwrap();
        assert!(!response.cached);

        state.cache.set(&req.profile, "natal", json!({})).await;

        let response = contains_handler(State(state), Json(req.clone())).await.unwrap();
        assert!(response.cached);
        assert_eq!(response.fingerprint, fingerprint(&req.profile, "natal"));
    }

    #[tokio::test]
    async fn test_invalidate_handler() {
        let state = test_state();
        let req = natal_request();
        state.cache.set(&req.profile, "natal", json!({})).await;

        let response = invalidate_handler(State(state.clone()), Json(req.clone()))
            .await
            .unwrap();
        assert!(response.invalidated);

        let response = invalidate_handler(State(state.clone()), Json(req)).await.unwrap();
        assert!(!response.invalidated);
        assert!(state.cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_invalid_request_rejected() {
        let state = test_state();
        let req = ChartKeyRequest {
            profile: Profile::new("1990-05-15"),
            chart_type: String::new(),
        };

        let result = invalidate_handler(State(state), Json(req)).await;
        assert!(matches!(result, Err(CacheError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_clear_and_stats_handlers() {
        let state = test_state();
        for day in 1..=3 {
            let profile = Profile::new(format!("2000-01-0{day}"));
            state.cache.set(&profile, "natal", json!(day)).await;
        }

        let stats = stats_handler(State(state.clone())).await;
        assert_eq!(stats.size, 3);
        assert_eq!(stats.max_size, 1000);

        let response = clear_handler(State(state.clone())).await;
        assert_eq!(response.removed, 3);

        let stats = stats_handler(State(state)).await;
        assert_eq!(stats.size, 0);
    }

    #[tokio::test]
    async fn test_cleanup_handler_with_nothing_expired() {
        let state = test_state();
        state
            .cache
            .set(&Profile::new("1990-05-15"), "natal", json!({}))
            .await;

        let response = cleanup_handler(State(state)).await;
        assert_eq!(response.removed, 0);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
