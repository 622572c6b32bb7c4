//! Prometheus metrics for the extraction cache

use prometheus::{IntCounter, IntGauge, Registry};

/// Extraction cache metrics
///
/// Counters are owned by the cache; `register` exposes them on a registry.
#[derive(Clone)]
pub struct ExtractionCacheMetrics {
    pub hits: IntCounter,
    pub misses: IntCounter,
    pub evictions: IntCounter,
    pub entries: IntGauge,
}

impl ExtractionCacheMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        Ok(Self {
            hits: IntCounter::new("flowgraph_cache_hits_total", "Extraction cache hits")?,
            misses: IntCounter::new("flowgraph_cache_misses_total", "Extraction cache misses")?,
            evictions: IntCounter::new(
                "flowgraph_cache_evictions_total",
                "Extraction cache LRU evictions",
            )?,
            entries: IntGauge::new("flowgraph_cache_entries", "Extraction cache entry count")?,
        })
    }

    pub fn register(&self, registry: &Registry) -> Result<(), prometheus::Error> {
        registry.register(Box::new(self.hits.clone()))?;
        registry.register(Box::new(self.misses.clone()))?;
        registry.register(Box::new(self.evictions.clone()))?;
        registry.register(Box::new(self.entries.clone()))?;
        Ok(())
    }

    pub fn hit_rate(&self) -> f64 {
        let hits = self.hits.get() as f64;
        let total = hits + self.misses.get() as f64;
        if total > 0.0 {
            hits / total
        } else {
            0.0
        }
    }

    /// Zero hit/miss counters
    pub fn reset_lookups(&self) {
        self.hits.reset();
        self.misses.reset();
    }
}
