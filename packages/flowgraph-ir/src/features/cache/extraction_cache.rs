/*
 * Extraction Cache
 *
 * Bounded LRU of analysis results keyed by (document, version, scope,
 * active file). Every get/insert/evict takes the lock once, so concurrent
 * callers never observe a half-applied eviction.
 */

use lru::LruCache;
use parking_lot::Mutex;
use prometheus::Registry;
use std::num::NonZeroUsize;
use std::sync::Arc;

use super::error::{CacheError, CacheResult};
use super::metrics::ExtractionCacheMetrics;
use super::types::{CacheKey, CacheStats};
use crate::config::CacheConfig;

pub struct ExtractionCache<V> {
    entries: Mutex<LruCache<CacheKey, Arc<V>>>,
    capacity: NonZeroUsize,
    metrics: ExtractionCacheMetrics,
}

impl<V> ExtractionCache<V> {
    pub fn new(config: &CacheConfig) -> CacheResult<Self> {
        let capacity =
            NonZeroUsize::new(config.capacity).ok_or(CacheError::InvalidCapacity(config.capacity))?;
        Ok(Self {
            entries: Mutex::new(LruCache::new(capacity)),
            capacity,
            metrics: ExtractionCacheMetrics::new()?,
        })
    }

    /// Cache whose counters are exported on `registry`
    pub fn with_registry(config: &CacheConfig, registry: &Registry) -> CacheResult<Self> {
        let cache = Self::new(config)?;
        cache.metrics.register(registry)?;
        Ok(cache)
    }

    /// Look up `key`, marking it most recently used on a hit
    pub fn get(&self, key: &CacheKey) -> Option<Arc<V>> {
        let found = self.entries.lock().get(key).cloned();
        match found {
            Some(value) => {
                self.metrics.hits.inc();
                tracing::debug!(key = %key, "extraction cache hit");
                Some(value)
            }
            None => {
                self.metrics.misses.inc();
                None
            }
        }
    }

    pub fn contains(&self, key: &CacheKey) -> bool {
        self.entries.lock().contains(key)
    }

    /// Store `value`, evicting least-recently-used entries while full.
    /// Replacing an existing key never evicts.
    pub fn insert(&self, key: CacheKey, value: impl Into<Arc<V>>) -> Arc<V> {
        let value = value.into();
        let mut entries = self.entries.lock();

        if !entries.contains(&key) {
            while entries.len() >= self.capacity.get() {
                match entries.pop_lru() {
                    Some((evicted, _)) => {
                        self.metrics.evictions.inc();
                        tracing::debug!(key = %evicted, "evicted extraction result");
                    }
                    None => break,
                }
            }
        }

        entries.put(key, Arc::clone(&value));
        self.metrics.entries.set(entries.len() as i64);
        value
    }

    /// Cached value for `key`, or the result of `compute` stored under it.
    ///
    /// `compute` runs without the lock held; two racing callers may both
    /// compute, and the later insert wins.
    pub fn get_or_insert_with(&self, key: &CacheKey, compute: impl FnOnce() -> V) -> Arc<V> {
        if let Some(value) = self.get(key) {
            return value;
        }
        self.insert(key.clone(), Arc::new(compute()))
    }

    /// Remove one entry, or everything when `key` is `None`.
    ///
    /// A full clear also resets the hit/miss counters.
    pub fn clear(&self, key: Option<&CacheKey>) {
        let mut entries = self.entries.lock();
        match key {
            Some(key) => {
                entries.pop(key);
            }
            None => {
                entries.clear();
                self.metrics.reset_lookups();
            }
        }
        self.metrics.entries.set(entries.len() as i64);
    }

    /// Drop every entry for `document_uri`, across versions and scopes.
    /// Returns how many entries were removed.
    pub fn invalidate_document(&self, document_uri: &str) -> usize {
        let mut entries = self.entries.lock();
        let stale: Vec<CacheKey> = entries
            .iter()
            .filter(|(key, _)| key.document_uri() == document_uri)
            .map(|(key, _)| key.clone())
            .collect();
        for key in &stale {
            entries.pop(key);
        }
        self.metrics.entries.set(entries.len() as i64);
        if !stale.is_empty() {
            tracing::debug!(document = document_uri, removed = stale.len(), "invalidated document");
        }
        stale.len()
    }

    pub fn stats(&self) -> CacheStats {
        let entries = self.entries.lock().len();
        CacheStats {
            hits: self.metrics.hits.get(),
            misses: self.metrics.misses.get(),
            evictions: self.metrics.evictions.get(),
            entries,
            capacity: self.capacity.get(),
            hit_rate: self.metrics.hit_rate(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    pub fn metrics(&self) -> &ExtractionCacheMetrics {
        &self.metrics
    }
}
