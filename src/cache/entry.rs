//! Cache Entry Module
//!
//! Defines the structure for individual cache entries and the expiry predicate.

use std::time::{Duration, Instant};

use crate::models::Chart;

// == Expiry Predicate ==
/// Returns true once an entry's age strictly exceeds the TTL.
///
/// Shared by lazy expiry on reads and by the periodic sweep.
pub fn is_past_ttl(age: Duration, ttl: Duration) -> bool {
    age > ttl
}

// == Cache Entry ==
/// A stored chart plus its bookkeeping.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored chart
    pub value: Chart,
    /// When the value was last written
    pub created_at: Instant,
    /// When the value was last written or read
    pub last_accessed: Instant,
    /// Number of successful reads
    pub access_count: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a fresh entry stamped with `now`.
    pub fn new(value: Chart, now: Instant) -> Self {
        Self {
            value,
            created_at: now,
            last_accessed: now,
            access_count: 0,
        }
    }

    // == Touch ==
    /// Records a successful read.
    pub fn touch(&mut self, now: Instant) {
        self.access_count += 1;
        self.last_accessed = now;
    }

    // == Refresh ==
    /// Replaces the value and restarts the entry's lifetime.
    pub fn refresh(&mut self, value: Chart, now: Instant) {
        self.value = value;
        self.created_at = now;
        self.last_accessed = now;
    }

    // == Age ==
    /// Time elapsed since the value was written.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Expired ==
    /// Checks the entry against a TTL at the given instant.
    pub fn is_expired(&self, ttl: Duration, now: Instant) -> bool {
        is_past_ttl(self.age(now), ttl)
    }
}
