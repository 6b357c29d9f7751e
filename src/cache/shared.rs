//! Shared Cache Module
//!
//! Thread-safe handle over a [`CacheStore`] and the builder-wrapping lookup.
//!
//! # Known limitation
//! There is no single-flight de-duplication: two tasks that miss on the same key
//! at the same time will both run the builder, and the later write wins. The lock
//! is never held while a builder runs.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{fingerprint, CacheStats, CacheStore};
use crate::error::Result;
use crate::models::{mark_cached, Chart, Profile};

// == Shared Chart Cache ==
/// Cloneable handle to one process-wide chart cache.
///
/// Built once by the composition root and passed to whoever needs it.
#[derive(Debug, Clone)]
pub struct SharedChartCache {
    inner: Arc<RwLock<CacheStore>>,
}

impl SharedChartCache {
    /// Wraps an existing store.
    pub fn new(store: CacheStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Creates a store with the given capacity and TTL and wraps it.
    pub fn with_limits(max_size: usize, ttl_seconds: u64) -> Result<Self> {
        Ok(Self::new(CacheStore::new(max_size, ttl_seconds)?))
    }

    // == Cached Build ==
    /// Returns the cached chart, or builds, stores and returns a new one.
    ///
    /// The returned chart carries `metadata.cached`: `true` when served from the
    /// cache, `false` when freshly built. The stored copy is the builder's raw
    /// output. A builder error is returned unchanged and nothing is stored.
    pub async fn cached_build_chart<F, Fut, E>(
        &self,
        profile: &Profile,
        chart_type: &str,
        builder: F,
    ) -> std::result::Result<Chart, E>
    where
        F: FnOnce(&Profile) -> Fut,
        Fut: Future<Output = std::result::Result<Chart, E>>,
    {
        let key = fingerprint(profile, chart_type);

        let cached = self.inner.write().await.get_by_key(&key);
        if let Some(chart) = cached {
            return Ok(mark_cached(chart, true));
        }

        debug!(chart_type, "building chart on cache miss");
        let chart = builder(profile).await?;

        self.inner.write().await.set_by_key(key, chart.clone());
        Ok(mark_cached(chart, false))
    }

    // == Store Operations ==
    pub async fn get(&self, profile: &Profile, chart_type: &str) -> Option<Chart> {
        self.inner.write().await.get(profile, chart_type)
    }

    pub async fn set(&self, profile: &Profile, chart_type: &str, chart: Chart) {
        self.inner.write().await.set(profile, chart_type, chart);
    }

    pub async fn invalidate(&self, profile: &Profile, chart_type: &str) -> bool {
        self.inner.write().await.invalidate(profile, chart_type)
    }

    pub async fn clear(&self) -> usize {
        self.inner.write().await.clear()
    }

    pub async fn cleanup_expired(&self) -> usize {
        self.inner.write().await.cleanup_expired()
    }

    pub async fn contains(&self, profile: &Profile, chart_type: &str) -> bool {
        self.inner.read().await.contains(profile, chart_type)
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    pub async fn stats(&self) -> CacheStats {
        self.inner.read().await.stats()
    }
}
