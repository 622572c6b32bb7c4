//! Rendered hierarchy models
//!
//! Trees of named containers plus the node -> container assignment map,
//! in the shape the rendering layer consumes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::node::NodeId;

/// Hierarchy ids understood by the renderer
pub const LOCATION_HIERARCHY_ID: &str = "location";
pub const CODE_HIERARCHY_ID: &str = "code";

/// Named grouping node in a hierarchy tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyContainer {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub children: Vec<HierarchyContainer>,
}

impl HierarchyContainer {
    pub fn leaf(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Visit this container and every descendant, pre-order
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a HierarchyContainer)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }

    pub fn find(&self, id: &str) -> Option<&HierarchyContainer> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }
}

/// One selectable hierarchy (`hierarchyChoices` entry)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hierarchy {
    pub id: String,
    pub name: String,
    pub children: Vec<HierarchyContainer>,
}

impl Hierarchy {
    /// Every container id in the hierarchy, pre-order
    pub fn container_ids(&self) -> Vec<&str> {
        let mut ids = Vec::new();
        for root in &self.children {
            root.walk(&mut |c| ids.push(c.id.as_str()));
        }
        ids
    }

    pub fn find(&self, id: &str) -> Option<&HierarchyContainer> {
        self.children.iter().find_map(|c| c.find(id))
    }

    pub fn container_count(&self) -> usize {
        self.container_ids().len()
    }
}

/// node id -> container id, one map per hierarchy
pub type NodeAssignment = BTreeMap<NodeId, String>;
