//! Final visualization structure handed to the rendering layer

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::edge::Edge;
use super::hierarchy::{Hierarchy, NodeAssignment, LOCATION_HIERARCHY_ID};
use super::node::{Node, NodeType};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendItem {
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub label: String,
}

/// Static node-type legend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Legend {
    pub title: String,
    pub items: Vec<LegendItem>,
}

impl Legend {
    pub fn standard() -> Self {
        let items = NodeType::ALL
            .iter()
            .map(|node_type| LegendItem {
                node_type: *node_type,
                label: legend_label(*node_type).to_string(),
            })
            .collect();

        Self {
            title: "Operator Types".to_string(),
            items,
        }
    }
}

fn legend_label(node_type: NodeType) -> &'static str {
    match node_type {
        NodeType::Source => "Source",
        NodeType::Transform => "Transform",
        NodeType::Join => "Join",
        NodeType::Aggregation => "Aggregation",
        NodeType::Network => "Network",
        NodeType::Sink => "Sink",
        NodeType::Tee => "Tee",
    }
}

impl Default for Legend {
    fn default() -> Self {
        Self::standard()
    }
}

/// Nodes, edges, both hierarchies and their assignments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualizationGraph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub hierarchy_choices: Vec<Hierarchy>,
    pub node_assignments: BTreeMap<String, NodeAssignment>,
    pub selected_hierarchy: String,
    pub legend: Legend,
}

impl VisualizationGraph {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self {
            nodes,
            edges,
            hierarchy_choices: Vec::new(),
            node_assignments: BTreeMap::new(),
            selected_hierarchy: LOCATION_HIERARCHY_ID.to_string(),
            legend: Legend::standard(),
        }
    }

    pub fn push_hierarchy(&mut self, hierarchy: Hierarchy, assignment: NodeAssignment) {
        self.node_assignments
            .insert(hierarchy.id.clone(), assignment);
        self.hierarchy_choices.push(hierarchy);
    }

    pub fn hierarchy(&self, id: &str) -> Option<&Hierarchy> {
        self.hierarchy_choices.iter().find(|h| h.id == id)
    }

    pub fn assignments(&self, hierarchy_id: &str) -> Option<&NodeAssignment> {
        self.node_assignments.get(hierarchy_id)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
