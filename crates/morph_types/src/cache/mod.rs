//! Concurrent memo table keyed by [`ReflectionCacheKey`].
//!
//! Entries live as long as the cache itself. There is no eviction.

use dashmap::DashMap;
use rustc_hash::FxBuildHasher;

use crate::ReflectionCacheKey;

/// Memoizes reflection-derived artifacts so repeated lookups are O(1).
pub struct ReflectionCache<V> {
    entries: DashMap<ReflectionCacheKey, V, FxBuildHasher>,
}

impl<V: Clone> ReflectionCache<V> {
    /// Create an empty cache.
    pub fn new() -> Self {
        ReflectionCache {
            entries: DashMap::with_hasher(FxBuildHasher),
        }
    }

    /// Get a cached value.
    pub fn get(&self, key: &ReflectionCacheKey) -> Option<V> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    /// Insert a value, returning the previous one.
    pub fn insert(&self, key: ReflectionCacheKey, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    /// Get the cached value, computing and storing it on first use.
    ///
    /// `compute` runs at most once per key under the entry's shard lock, so
    /// it must not touch this cache.
    pub fn get_or_insert_with(&self, key: ReflectionCacheKey, compute: impl FnOnce() -> V) -> V {
        if let Some(hit) = self.get(&key) {
            return hit;
        }
        self.entries.entry(key).or_insert_with(compute).value().clone()
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.entries.clear();
    }
}

impl<V: Clone> Default for ReflectionCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
