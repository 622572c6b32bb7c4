//! Extraction cache tests
//!
//! LRU behavior, invalidation, counters and concurrent access.

use flowgraph_ir::config::CacheConfig;
use flowgraph_ir::features::cache::{AnalysisScope, CacheError, CacheKey, ExtractionCache};
use prometheus::Registry;
use quickcheck_macros::quickcheck;
use std::sync::Arc;
use std::thread;

fn cache(capacity: usize) -> ExtractionCache<u64> {
    ExtractionCache::new(&CacheConfig { capacity }).unwrap()
}

fn key(uri: &str, version: i64) -> CacheKey {
    CacheKey::new(uri, version, AnalysisScope::Function, Some("lib.rs"))
}

// ============================================================
// Keys
// ============================================================

#[test]
fn test_key_scope_distinguishes_entries() {
    let cache = cache(8);
    cache.insert(CacheKey::new("doc", 1, AnalysisScope::File, Some("a.rs")), 1);
    cache.insert(CacheKey::new("doc", 1, AnalysisScope::Function, Some("a.rs")), 2);
    cache.insert(CacheKey::new("doc", 1, AnalysisScope::Workspace, Some("a.rs")), 3);

    assert_eq!(cache.len(), 3);
    // workspace entries ignore the active file
    let ws = CacheKey::new("doc", 1, AnalysisScope::Workspace, Some("b.rs"));
    assert_eq!(cache.get(&ws).map(|v| *v), Some(3));
}

#[test]
fn test_new_version_misses() {
    let cache = cache(4);
    cache.insert(key("doc", 1), 10);
    assert!(cache.get(&key("doc", 2)).is_none());
    assert_eq!(cache.stats().misses, 1);
}

// ============================================================
// LRU
// ============================================================

#[test]
fn test_capacity_one() {
    let cache = cache(1);
    cache.insert(key("a", 1), 1);
    cache.insert(key("b", 1), 2);

    assert_eq!(cache.len(), 1);
    assert!(cache.get(&key("a", 1)).is_none());
    assert_eq!(cache.get(&key("b", 1)).map(|v| *v), Some(2));
    assert_eq!(cache.stats().evictions, 1);
}

#[test]
fn test_default_capacity() {
    let cache: ExtractionCache<u64> = ExtractionCache::new(&CacheConfig::default()).unwrap();
    assert_eq!(cache.capacity(), 50);
    for version in 0..60 {
        cache.insert(key("doc", version), version as u64);
    }
    assert_eq!(cache.len(), 50);
    assert_eq!(cache.stats().evictions, 10);
    // oldest ten are gone
    assert!(!cache.contains(&key("doc", 9)));
    assert!(cache.contains(&key("doc", 10)));
}

#[test]
fn test_zero_capacity_is_error() {
    let result = ExtractionCache::<u64>::new(&CacheConfig { capacity: 0 });
    assert!(matches!(result, Err(CacheError::InvalidCapacity(0))));
}

// ============================================================
// Clear / invalidate / stats
// ============================================================

#[test]
fn test_clear_all_resets_counters() {
    let cache = cache(4);
    cache.insert(key("a", 1), 1);
    cache.get(&key("a", 1));
    cache.get(&key("missing", 1));

    let before = cache.stats();
    assert_eq!((before.hits, before.misses, before.entries), (1, 1, 1));

    cache.clear(None);
    let after = cache.stats();
    assert_eq!((after.hits, after.misses, after.entries), (0, 0, 0));
    assert_eq!(after.hit_rate, 0.0);
}

#[test]
fn test_invalidate_document_across_versions() {
    let cache = cache(8);
    for version in 1..=3 {
        cache.insert(key("file:///a.rs", version), version as u64);
    }
    cache.insert(key("file:///b.rs", 1), 9);

    assert_eq!(cache.invalidate_document("file:///a.rs"), 3);
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_metrics_exported() {
    let registry = Registry::new();
    let cache: ExtractionCache<u64> =
        ExtractionCache::with_registry(&CacheConfig { capacity: 1 }, &registry).unwrap();
    cache.insert(key("a", 1), 1);
    cache.insert(key("b", 1), 2);

    let names: Vec<String> = registry
        .gather()
        .iter()
        .map(|family| family.get_name().to_string())
        .collect();
    assert!(names.contains(&"flowgraph_cache_evictions_total".to_string()));
    assert_eq!(cache.metrics().evictions.get(), 1);
    assert_eq!(cache.metrics().entries.get(), 1);
}

// ============================================================
// Concurrency
// ============================================================

#[test]
fn test_concurrent_inserts_respect_capacity() {
    let cache = Arc::new(cache(16));

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..200 {
                    let k = key(&format!("doc_{}", t), i);
                    cache.insert(k.clone(), i as u64);
                    cache.get(&k);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let stats = cache.stats();
    assert_eq!(stats.entries, 16);
    assert_eq!(stats.evictions, 8 * 200 - 16);
    assert_eq!(stats.hits + stats.misses, 8 * 200);
}

#[test]
fn test_concurrent_get_or_insert_same_key() {
    let cache = Arc::new(cache(4));
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || *cache.get_or_insert_with(&key("shared", 1), || 42))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 42);
    }
    assert_eq!(cache.len(), 1);
}

// ============================================================
// Properties
// ============================================================

#[quickcheck]
fn prop_len_never_exceeds_capacity(capacity: u8, versions: Vec<u8>) -> bool {
    let capacity = usize::from(capacity % 16) + 1;
    let cache = cache(capacity);
    versions.iter().all(|v| {
        cache.insert(key("doc", i64::from(*v)), u64::from(*v));
        cache.len() <= capacity
    })
}

#[quickcheck]
fn prop_most_recent_insert_is_present(capacity: u8, versions: Vec<u8>) -> bool {
    let capacity = usize::from(capacity % 16) + 1;
    let cache = cache(capacity);
    versions.iter().all(|v| {
        let k = key("doc", i64::from(*v));
        cache.insert(k.clone(), u64::from(*v));
        cache.contains(&k)
    })
}
