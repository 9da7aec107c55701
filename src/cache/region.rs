//! Cache Region Module
//!
//! A named, shareable cache region over a [`CacheStore`].

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::trace;

use crate::cache::{CacheKey, CacheStats, CacheStore, CachedValue};
use crate::config::Config;

/// Name of the region holding employee records.
pub const EMPLOYEES_REGION: &str = "employees";

/// Named cache region shared across handlers and background tasks.
///
/// Each operation takes the lock for that single call only; callers get no
/// atomicity across several calls.
#[derive(Debug, Clone)]
pub struct CacheRegion {
    name: Arc<str>,
    store: Arc<RwLock<CacheStore<CacheKey, CachedValue>>>,
}

impl CacheRegion {
    /// Creates an empty region.
    ///
    /// # Arguments
    /// * `name` - Region name, used in logs
    /// * `max_entries` - Capacity before LRU eviction, 0 for no bound
    /// * `ttl` - Entry TTL in seconds, None for no expiration
    pub fn new(name: &str, max_entries: usize, ttl: Option<u64>) -> Self {
        Self {
            name: Arc::from(name),
            store: Arc::new(RwLock::new(CacheStore::new(max_entries, ttl))),
        }
    }

    /// Creates the employees region sized from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(EMPLOYEES_REGION, config.cache_max_entries, config.cache_ttl)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks up a key. LRU order and hit/miss stats are updated.
    pub async fn get(&self, key: &CacheKey) -> Option<CachedValue> {
        // Write lock: a read touches LRU order and stats
        let value = self.store.write().await.get(key);
        trace!(region = %self.name, %key, hit = value.is_some(), "cache lookup");
        value
    }

    /// Stores a value, replacing whatever the key held.
    pub async fn put(&self, key: CacheKey, value: CachedValue) {
        trace!(region = %self.name, %key, "cache put");
        self.store.write().await.put(key, value);
    }

    /// Drops the entry for a key. Returns whether an entry was present.
    pub async fn evict(&self, key: &CacheKey) -> bool {
        let removed = self.store.write().await.remove(key);
        trace!(region = %self.name, %key, removed, "cache evict");
        removed
    }

    /// Checks for a live entry without affecting LRU order or stats.
    pub async fn contains(&self, key: &CacheKey) -> bool {
        self.store.read().await.contains(key)
    }

    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    /// Removes expired entries, returning how many were dropped.
    pub async fn cleanup_expired(&self) -> usize {
        self.store.write().await.cleanup_expired()
    }
}
