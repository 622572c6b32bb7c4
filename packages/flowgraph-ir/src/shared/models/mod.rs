//! Shared models

mod chain;
mod edge;
mod hierarchy;
mod node;
mod output;
mod span;

pub use chain::{
    ExtractionInput, FunctionSpan, OperatorCall, OperatorChainRecord, OperatorKey,
    TypeAnnotation, VariableBinding,
};
pub use edge::{tags, Edge, EdgeId};
pub use hierarchy::{
    Hierarchy, HierarchyContainer, NodeAssignment, CODE_HIERARCHY_ID, LOCATION_HIERARCHY_ID,
};
pub use node::{Node, NodeId, NodeType};
pub use output::{Legend, LegendItem, VisualizationGraph};
pub use span::{Location, Span};
