//! Feature modules - each feature follows Hexagonal Architecture
//!
//! Each feature contains:
//! - domain/         - Pure data types and invariants
//! - infrastructure/ - Algorithms over the domain types
//! - application/    - Entry points composing the above (where needed)

// Generic type-string splitting and location/collection facts
pub mod type_parsing;

// Configuration-backed operator categories and pipeline-stage validity
pub mod operator_classifier;

// Chain records + type annotations → deduplicated nodes and edges
pub mod graph_builder;

// Location and code hierarchies with single-child collapse
pub mod hierarchy;

// Bounded LRU of finished analyses
pub mod cache;
