//! Shared module - Common types and ports
//!
//! Types shared across all features: extractor input records, the graph
//! model (nodes, edges, hierarchies) and the ports external collaborators
//! implement.

pub mod models;
pub mod ports;

// Re-exports for convenience
pub use models::*;
pub use ports::{FunctionResolver, FunctionSpanIndex, TopLevelOnly};
