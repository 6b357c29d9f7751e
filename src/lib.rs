//! Chart Cache - memoization layer for chart computations
//!
//! Caches built charts by profile fingerprint with TTL expiration and LRU eviction,
//! and exposes a small administration API over HTTP.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{fingerprint, CacheStats, CacheStore, SharedChartCache};
pub use config::Config;
pub use error::{CacheError, Result};
pub use models::{Chart, Profile};
pub use tasks::spawn_cleanup_task;
