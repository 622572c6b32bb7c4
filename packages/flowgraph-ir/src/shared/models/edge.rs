//! Graph edge model

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;

use super::node::NodeId;

/// Semantic tag vocabulary
pub mod tags {
    pub const NETWORK: &str = "network";
    pub const NETWORK_SOURCE: &str = "network-source";
    pub const NETWORK_TARGET: &str = "network-target";
    pub const REMOTE_SENDER: &str = "remote-sender";
    pub const REMOTE_RECEIVER: &str = "remote-receiver";
    pub const NETWORK_TO_NETWORK: &str = "network-to-network";
    pub const KEYED: &str = "Keyed";
}

/// Dense edge index, rendered as a stringified integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub u32);

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for EdgeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EdgeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse::<u32>()
            .map(EdgeId)
            .map_err(|_| de::Error::custom(format!("invalid edge id '{}'", raw)))
    }
}

/// Directed dataflow edge between two stages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,

    /// Sorted by construction
    #[serde(default)]
    pub semantic_tags: BTreeSet<String>,
}

impl Edge {
    pub fn new(id: EdgeId, source: NodeId, target: NodeId) -> Self {
        Self {
            id,
            source,
            target,
            semantic_tags: BTreeSet::new(),
        }
    }

    pub fn add_tag(&mut self, tag: impl Into<String>) {
        self.semantic_tags.insert(tag.into());
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.semantic_tags.contains(tag)
    }
}
