//! Hierarchy Builder
//!
//! Produces both hierarchies the renderer offers, `location` and `code`,
//! each with its node assignment map.

use crate::features::graph_builder::AssembledGraph;
use crate::features::hierarchy::infrastructure::{build_code_hierarchy, build_location_hierarchy};
use crate::shared::models::{
    Hierarchy, Node, NodeAssignment, CODE_HIERARCHY_ID, LOCATION_HIERARCHY_ID,
};
use crate::shared::ports::FunctionResolver;

pub const LOCATION_HIERARCHY_NAME: &str = "Location";
pub const CODE_HIERARCHY_NAME: &str = "Code";

const LOCATION_ID_PREFIX: &str = "loc";
const CODE_ID_PREFIX: &str = "code";

#[derive(Debug, Clone, Copy, Default)]
pub struct HierarchyBuilder;

impl HierarchyBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn location(&self, nodes: &[Node]) -> (Hierarchy, NodeAssignment) {
        build_location_hierarchy(nodes).render(
            LOCATION_HIERARCHY_ID,
            LOCATION_HIERARCHY_NAME,
            LOCATION_ID_PREFIX,
        )
    }

    pub fn code(
        &self,
        file_path: &str,
        graph: &AssembledGraph,
        resolver: &dyn FunctionResolver,
    ) -> (Hierarchy, NodeAssignment) {
        build_code_hierarchy(file_path, &graph.chains, graph.nodes.len(), resolver).render(
            CODE_HIERARCHY_ID,
            CODE_HIERARCHY_NAME,
            CODE_ID_PREFIX,
        )
    }

    /// Location hierarchy first, then code
    pub fn build_all(
        &self,
        file_path: &str,
        graph: &AssembledGraph,
        resolver: &dyn FunctionResolver,
    ) -> Vec<(Hierarchy, NodeAssignment)> {
        vec![
            self.location(&graph.nodes),
            self.code(file_path, graph, resolver),
        ]
    }
}
