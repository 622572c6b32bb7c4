/*
 * Flowgraph IR - Dataflow Graph Construction & Hierarchical Clustering
 *
 * Feature-First Hexagonal Architecture:
 * - shared/    : Extractor records, graph model, resolver port
 * - features/  : Vertical slices (type_parsing → operator_classifier → graph_builder → hierarchy, cache)
 * - pipeline/  : Orchestration and output validation
 * - config/    : Versioned YAML configuration
 *
 * Input is already-extracted operator chains and type annotations; the crate
 * never parses source text or talks to a language server.
 */

#![allow(clippy::too_many_arguments)] // Stage entry points take every input explicitly
#![allow(clippy::module_inception)] // Module naming intentional

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and ports
pub mod shared;

/// Feature modules
pub mod features;

/// Pipeline orchestration
pub mod pipeline;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{OperatorConfig, PipelineConfig};
pub use errors::{FlowgraphError, Result};
pub use features::cache::{AnalysisScope, CacheKey, ExtractionCache};
pub use pipeline::{validate_graph, AnalysisOutput, AnalysisStats, GraphPipeline, ValidationIssue};
pub use shared::models::{
    Edge, EdgeId, ExtractionInput, Hierarchy, Node, NodeId, NodeType, VisualizationGraph,
};
pub use shared::ports::{FunctionResolver, FunctionSpanIndex, TopLevelOnly};
