//! Pipeline orchestration
//!
//! records → Graph Assembler → Edge Semantic Tagger → Hierarchy Builder →
//! validation → `VisualizationGraph`

pub mod orchestrator;
pub mod validation;

pub use orchestrator::{AnalysisOutput, AnalysisStats, GraphPipeline};
pub use validation::{validate_graph, ValidationIssue};
