//! Output validation
//!
//! Structural checks on a finished `VisualizationGraph`. Issues are
//! reported, never fixed: the renderer decides what to do with a graph that
//! fails them.

use ahash::AHashSet;
use thiserror::Error;

use crate::shared::models::{HierarchyContainer, NodeId, VisualizationGraph};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("node {0} has an empty short label")]
    EmptyNodeLabel(NodeId),

    #[error("node id {0} appears more than once")]
    DuplicateNode(NodeId),

    #[error("edge {edge} references missing {endpoint} node {node}")]
    DanglingEdge {
        edge: String,
        endpoint: &'static str,
        node: NodeId,
    },

    #[error("hierarchy at index {0} has an empty id or name")]
    UnnamedHierarchy(usize),

    #[error("hierarchy {hierarchy} has a container with an empty id or name")]
    UnnamedContainer { hierarchy: String },

    #[error("hierarchy {hierarchy} assigns missing node {node}")]
    UnknownAssignedNode { hierarchy: String, node: NodeId },

    #[error("hierarchy {hierarchy} assigns node {node} to missing container {container}")]
    UnknownContainer {
        hierarchy: String,
        node: NodeId,
        container: String,
    },

    #[error("assignments given for unknown hierarchy {0}")]
    UnknownHierarchy(String),
}

/// Every structural problem in `graph`, in a stable order
pub fn validate_graph(graph: &VisualizationGraph) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let mut node_ids = AHashSet::with_capacity(graph.nodes.len());
    for node in &graph.nodes {
        if !node_ids.insert(node.id) {
            issues.push(ValidationIssue::DuplicateNode(node.id));
        }
        if node.short_label.trim().is_empty() {
            issues.push(ValidationIssue::EmptyNodeLabel(node.id));
        }
    }

    for edge in &graph.edges {
        for (endpoint, node) in [("source", edge.source), ("target", edge.target)] {
            if !node_ids.contains(&node) {
                issues.push(ValidationIssue::DanglingEdge {
                    edge: edge.id.to_string(),
                    endpoint,
                    node,
                });
            }
        }
    }

    for (index, hierarchy) in graph.hierarchy_choices.iter().enumerate() {
        if hierarchy.id.is_empty() || hierarchy.name.is_empty() {
            issues.push(ValidationIssue::UnnamedHierarchy(index));
        }

        let mut unnamed = false;
        for root in &hierarchy.children {
            root.walk(&mut |c: &HierarchyContainer| {
                unnamed |= c.id.is_empty() || c.name.is_empty();
            });
        }
        if unnamed {
            issues.push(ValidationIssue::UnnamedContainer {
                hierarchy: hierarchy.id.clone(),
            });
        }

        let Some(assignment) = graph.assignments(&hierarchy.id) else {
            continue;
        };
        let containers: AHashSet<&str> = hierarchy.container_ids().into_iter().collect();
        for (node, container) in assignment {
            if !node_ids.contains(node) {
                issues.push(ValidationIssue::UnknownAssignedNode {
                    hierarchy: hierarchy.id.clone(),
                    node: *node,
                });
            }
            if !containers.contains(container.as_str()) {
                issues.push(ValidationIssue::UnknownContainer {
                    hierarchy: hierarchy.id.clone(),
                    node: *node,
                    container: container.clone(),
                });
            }
        }
    }

    for hierarchy_id in graph.node_assignments.keys() {
        if graph.hierarchy(hierarchy_id).is_none() {
            issues.push(ValidationIssue::UnknownHierarchy(hierarchy_id.clone()));
        }
    }

    issues
}
