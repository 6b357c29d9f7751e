//! Cache Statistics Module
//!
//! Tracks hits, misses, evictions and expirations, and renders point-in-time
//! snapshots for observability.

use serde::Serialize;

// == Counters ==
/// Monotonic counters owned by the store.
#[derive(Debug, Clone, Default)]
pub struct CacheCounters {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub expirations: u64,
}

impl CacheCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn record_expirations(&mut self, count: usize) {
        self.expirations += count as u64;
    }

    // == Hit Rate ==
    /// Hit percentage over all lookups, or 0.0 before the first lookup.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64 * 100.0
        }
    }
}

// == Cache Stats ==
/// Snapshot returned by `CacheStore::stats`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheStats {
    /// Live entries currently held
    pub size: usize,
    /// Configured capacity
    pub max_size: usize,
    /// Configured entry lifetime
    pub ttl_seconds: u64,
    /// Successful lookups
    pub hits: u64,
    /// Lookups that found nothing or an expired entry
    pub misses: u64,
    /// Percentage of lookups that hit, 0.0 when there were none
    pub hit_rate: f64,
    /// Entries dropped to make room
    pub evictions: u64,
    /// Entries dropped for exceeding the TTL
    pub expirations: u64,
}

impl CacheStats {
    /// Builds a snapshot from the counters and store configuration.
    pub fn snapshot(
        counters: &CacheCounters,
        size: usize,
        max_size: usize,
        ttl_seconds: u64,
    ) -> Self {
        Self {
            size,
            max_size,
            ttl_seconds,
            hits: counters.hits,
            misses: counters.misses,
            hit_rate: counters.hit_rate(),
            evictions: counters.evictions,
            expirations: counters.expirations,
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_new() {
        let counters = CacheCounters::new();
        assert_eq!(counters.hits, 0);
        assert_eq!(counters.misses, 0);
        assert_eq!(counters.evictions, 0);
        assert_eq!(counters.expirations, 0);
    }

    #[test]
    fn test_hit_rate_no_requests() {
        assert_eq!(CacheCounters::new().hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_all_hits() {
        let mut counters = CacheCounters::new();
        counters.record_hit();
        counters.record_hit();
        assert_eq!(counters.hit_rate(), 100.0);
    }

    #[test]
    fn test_hit_rate_all_misses() {
        let mut counters = CacheCounters::new();
        counters.record_miss();
        counters.record_miss();
        assert_eq!(counters.hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_two_thirds() {
        let mut counters = CacheCounters::new();
        counters.record_miss();
        counters.record_hit();
        counters.record_hit();
        assert!((counters.hit_rate() - 66.67).abs() < 0.01);
    }

    #[test]
    fn test_record_eviction_and_expiration() {
        let mut counters = CacheCounters::new();
        counters.record_eviction();
        counters.record_eviction();
        counters.record_expirations(3);
        assert_eq!(counters.evictions, 2);
        assert_eq!(counters.expirations, 3);
    }

    #[test]
    fn test_snapshot() {
        let mut counters = CacheCounters::new();
        counters.record_hit();
        counters.record_miss();

        let stats = CacheStats::snapshot(&counters, 4, 10, 60);
        assert_eq!(stats.size, 4);
        assert_eq!(stats.max_size, 10);
        assert_eq!(stats.ttl_seconds, 60);
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hit_rate, 50.0);
    }

    #[test]
    fn test_snapshot_serializes() {
        let stats = CacheStats::snapshot(&CacheCounters::new(), 0, 10, 60);
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["max_size"], 10);
        assert_eq!(json["hit_rate"], 0.0);
    }
}
