//! Graph node model

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::span::Location;
use crate::features::type_parsing::domain::CollectionSemantics;

/// Dense node index, rendered as a stringified integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for NodeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NodeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse::<u32>()
            .map(NodeId)
            .map_err(|_| de::Error::custom(format!("invalid node id '{}'", raw)))
    }
}

/// Pipeline stage category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NodeType {
    Source,
    Sink,
    Transform,
    Join,
    Network,
    Aggregation,
    Tee,
}

impl NodeType {
    pub const ALL: [NodeType; 7] = [
        NodeType::Source,
        NodeType::Transform,
        NodeType::Join,
        NodeType::Aggregation,
        NodeType::Network,
        NodeType::Sink,
        NodeType::Tee,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Source => "Source",
            NodeType::Sink => "Sink",
            NodeType::Transform => "Transform",
            NodeType::Join => "Join",
            NodeType::Network => "Network",
            NodeType::Aggregation => "Aggregation",
            NodeType::Tee => "Tee",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pipeline stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: NodeId,
    pub node_type: NodeType,

    /// Operator name
    pub short_label: String,

    /// Operator name plus truncated call-site text
    pub full_label: String,

    /// Normalized location type, e.g. `Tick<Process<Leader>>`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_kind: Option<String>,

    /// Function-qualified tick binding name, e.g. `leader::tick`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tick_variable: Option<String>,

    /// Call-site position. Never part of node identity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Location>,

    #[serde(skip)]
    pub semantics: Option<CollectionSemantics>,
}

impl Node {
    pub fn new(id: NodeId, node_type: NodeType, short_label: impl Into<String>) -> Self {
        let short_label = short_label.into();
        Self {
            id,
            node_type,
            full_label: short_label.clone(),
            short_label,
            location_kind: None,
            tick_variable: None,
            position: None,
            semantics: None,
        }
    }

    pub fn with_location_kind(mut self, location_kind: impl Into<String>) -> Self {
        self.location_kind = Some(location_kind.into());
        self
    }

    pub fn with_tick_variable(mut self, tick_variable: impl Into<String>) -> Self {
        self.tick_variable = Some(tick_variable.into());
        self
    }

    pub fn has_location(&self) -> bool {
        self.location_kind.is_some()
    }
}
