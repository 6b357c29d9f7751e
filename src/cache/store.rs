//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with LRU tracking and TTL expiration.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::cache::{fingerprint, CacheCounters, CacheEntry, CacheStats, LruTracker};
use crate::error::{CacheError, Result};
use crate::models::{Chart, Profile};

// == Cache Store ==
/// Bounded chart storage with LRU eviction and TTL expiry.
///
/// Not synchronized; wrap it in [`SharedChartCache`](crate::cache::SharedChartCache)
/// to share it between tasks.
#[derive(Debug)]
pub struct CacheStore {
    /// Fingerprint -> entry
    entries: HashMap<String, CacheEntry>,
    /// LRU access tracker
    lru: LruTracker,
    /// Performance counters
    counters: CacheCounters,
    /// Maximum number of entries allowed
    max_size: usize,
    /// Entry lifetime
    ttl: Duration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new CacheStore with the given capacity and entry lifetime.
    ///
    /// # Errors
    /// `CacheError::InvalidConfig` if either argument is zero.
    pub fn new(max_size: usize, ttl_seconds: u64) -> Result<Self> {
        if max_size == 0 {
            return Err(CacheError::InvalidConfig(
                "max_size must be greater than zero".to_string(),
            ));
        }
        if ttl_seconds == 0 {
            return Err(CacheError::InvalidConfig(
                "ttl_seconds must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            entries: HashMap::with_capacity(max_size.min(1024)),
            lru: LruTracker::new(),
            counters: CacheCounters::new(),
            max_size,
            ttl: Duration::from_secs(ttl_seconds),
        })
    }

    // == Get ==
    /// Looks up the chart cached for a profile and chart type.
    pub fn get(&mut self, profile: &Profile, chart_type: &str) -> Option<Chart> {
        self.get_by_key(&fingerprint(profile, chart_type))
    }

    /// Looks up a chart by fingerprint.
    ///
    /// Absent and expired entries count as misses; expired ones are removed.
    /// A hit bumps the entry's access count and makes it most recently used.
    pub fn get_by_key(&mut self, key: &str) -> Option<Chart> {
        let now = Instant::now();

        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired(self.ttl, now),
            None => {
                self.counters.record_miss();
                debug!(key, "chart cache miss");
                return None;
            }
        };

        if expired {
            self.remove_key(key);
            self.counters.record_expirations(1);
            self.counters.record_miss();
            debug!(key, "chart cache miss (expired)");
            return None;
        }

        let entry = self.entries.get_mut(key)?;
        entry.touch(now);
        let value = entry.value.clone();
        self.lru.touch(key);
        self.counters.record_hit();
        debug!(key, "chart cache hit");
        Some(value)
    }

    // == Set ==
    /// Stores a chart for a profile and chart type.
    pub fn set(&mut self, profile: &Profile, chart_type: &str, chart: Chart) {
        self.set_by_key(fingerprint(profile, chart_type), chart);
    }

    /// Stores a chart under a fingerprint.
    ///
    /// Overwriting refreshes the value, its lifetime and its recency without
    /// changing the size. Inserting into a full store first evicts the least
    /// recently used entry.
    pub fn set_by_key(&mut self, key: String, chart: Chart) {
        let now = Instant::now();

        if let Some(entry) = self.entries.get_mut(&key) {
            entry.refresh(chart, now);
            self.lru.touch(&key);
            return;
        }

        if self.entries.len() >= self.max_size {
            self.evict_oldest();
        }

        self.lru.touch(&key);
        self.entries.insert(key, CacheEntry::new(chart, now));
    }

    // == Invalidate ==
    /// Drops the entry for a profile and chart type.
    ///
    /// Returns whether anything was removed.
    pub fn invalidate(&mut self, profile: &Profile, chart_type: &str) -> bool {
        self.invalidate_key(&fingerprint(profile, chart_type))
    }

    pub fn invalidate_key(&mut self, key: &str) -> bool {
        self.remove_key(key)
    }

    // == Clear ==
    /// Removes every entry and returns how many there were.
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        self.lru.clear();
        count
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let now = Instant::now();
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired(self.ttl, now))
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            self.remove_key(&key);
        }

        self.counters.record_expirations(count);
        count
    }

    // == Contains ==
    /// Checks for a live entry without touching recency or counters.
    pub fn contains(&self, profile: &Profile, chart_type: &str) -> bool {
        self.contains_key(&fingerprint(profile, chart_type))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries
            .get(key)
            .is_some_and(|entry| !entry.is_expired(self.ttl, Instant::now()))
    }

    // == Stats ==
    /// Returns a snapshot of the current cache statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats::snapshot(
            &self.counters,
            self.entries.len(),
            self.max_size,
            self.ttl.as_secs(),
        )
    }

    // == Accessors ==
    /// Returns the current number of entries, expired ones included until purged.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Internal Helpers ==
    fn remove_key(&mut self, key: &str) -> bool {
        if self.entries.remove(key).is_some() {
            self.lru.remove(key);
            true
        } else {
            false
        }
    }

    fn evict_oldest(&mut self) {
        if let Some(evicted) = self.lru.evict_oldest() {
            self.entries.remove(&evicted);
            self.counters.record_eviction();
            debug!(key = %evicted, "evicted least recently used chart");
        }
    }
}
