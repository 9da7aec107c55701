//! Cache Module
//!
//! In-process cache engine (TTL expiration, LRU eviction, stats) and the
//! named employees region built on it.

mod entry;
mod keys;
mod lru;
mod region;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use keys::{CacheKey, CachedValue};
pub use lru::LruTracker;
pub use region::{CacheRegion, EMPLOYEES_REGION};
pub use stats::CacheStats;
pub use store::CacheStore;
