// Graph Builder Domain Models
//
// Assembled dataflow graph before hierarchy building: a dense node table
// keyed by operator occurrence, the edges between nodes, and which chain
// produced which nodes (the code hierarchy needs that last part).

use ahash::AHashMap;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::shared::models::{Edge, Node, NodeId, OperatorKey};

// ============================================================
// Node Table
// ============================================================

/// Dense node storage with `(line, column, name)` dedup
#[derive(Debug, Clone, Default)]
pub struct NodeTable {
    nodes: Vec<Node>,
    by_key: AHashMap<OperatorKey, NodeId>,
}

impl NodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn lookup(&self, key: &OperatorKey) -> Option<NodeId> {
        self.by_key.get(key).copied()
    }

    /// Existing node for `key`, or a new one built by `make` with the next id.
    /// The flag is true when the node was created by this call.
    pub fn get_or_insert_with(
        &mut self,
        key: &OperatorKey,
        make: impl FnOnce(NodeId) -> Node,
    ) -> (NodeId, bool) {
        if let Some(id) = self.by_key.get(key) {
            return (*id, false);
        }
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(make(id));
        self.by_key.insert(key.clone(), id);
        (id, true)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }
}

// ============================================================
// Chain membership
// ============================================================

/// Where a chain came from in the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainOwner {
    /// `let variable = <chain>;`
    Binding {
        variable: String,
        declaration_line: u32,
    },
    /// A chain not bound to a variable
    Standalone,
}

impl ChainOwner {
    pub fn variable(&self) -> Option<&str> {
        match self {
            ChainOwner::Binding { variable, .. } => Some(variable),
            ChainOwner::Standalone => None,
        }
    }
}

/// Retained nodes of one chain, in source order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainNodes {
    pub owner: ChainOwner,
    /// Line used to resolve the enclosing function
    pub line: u32,
    pub nodes: Vec<NodeId>,
}

// ============================================================
// Result
// ============================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildStats {
    pub chains: usize,
    pub operators_seen: usize,
    pub operators_skipped: usize,
    pub nodes: usize,
    pub edges: usize,
    pub cross_chain_edges: usize,
    pub typed_nodes: usize,
}

/// Output of the Graph Assembler
#[derive(Debug, Clone, Default)]
pub struct AssembledGraph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    /// One entry per input chain, in processing order
    pub chains: Vec<ChainNodes>,
    /// Last retained node of each variable's chain
    pub producers: BTreeMap<String, NodeId>,
    pub stats: BuildStats,
}

impl AssembledGraph {
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
