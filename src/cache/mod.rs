//! Cache Module
//!
//! Chart memoization with fingerprint keys, TTL expiration and LRU eviction.

mod entry;
mod key;
mod lru;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use entry::{is_past_ttl, CacheEntry};
pub use key::{fingerprint, COORDINATE_PRECISION, FINGERPRINT_LEN};
pub use lru::LruTracker;
pub use shared::SharedChartCache;
pub use stats::{CacheCounters, CacheStats};
pub use store::CacheStore;
