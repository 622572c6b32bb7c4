//! Extraction cache
//!
//! Bounded LRU of finished analyses so repeated requests for the same
//! document version skip the pipeline.

pub mod error;
pub mod extraction_cache;
pub mod metrics;
pub mod types;

pub use error::{CacheError, CacheResult};
pub use extraction_cache::ExtractionCache;
pub use metrics::ExtractionCacheMetrics;
pub use types::{AnalysisScope, CacheKey, CacheStats};
