// Edge Semantic Tagger
//
// Adds tags to edges, never removes or replaces them:
// - network direction from the classifier's networking list
// - collection shape of the data flowing along the edge (source node type)

use crate::features::operator_classifier::OperatorClassifier;
use crate::shared::models::{tags, Edge, Node, NodeId};

fn node_at(nodes: &[Node], id: NodeId) -> Option<&Node> {
    nodes.get(id.index()).filter(|n| n.id == id)
}

/// Network direction tags.
///
/// | source networking | target networking | tags added |
/// |---|---|---|
/// | yes | no | network, network-source, remote-sender |
/// | no | yes | network, network-target, remote-receiver |
/// | yes | yes | network, network-to-network |
/// | no | no | none |
pub fn tag_network_edges(
    mut edges: Vec<Edge>,
    nodes: &[Node],
    classifier: &OperatorClassifier,
) -> Vec<Edge> {
    let is_networking = |id: NodeId| {
        node_at(nodes, id)
            .map(|n| classifier.is_networking_operator(&n.short_label))
            .unwrap_or(false)
    };

    let mut tagged = 0usize;
    for edge in &mut edges {
        match (is_networking(edge.source), is_networking(edge.target)) {
            (true, true) => {
                edge.add_tag(tags::NETWORK);
                edge.add_tag(tags::NETWORK_TO_NETWORK);
            }
            (true, false) => {
                edge.add_tag(tags::NETWORK);
                edge.add_tag(tags::NETWORK_SOURCE);
                edge.add_tag(tags::REMOTE_SENDER);
            }
            (false, true) => {
                edge.add_tag(tags::NETWORK);
                edge.add_tag(tags::NETWORK_TARGET);
                edge.add_tag(tags::REMOTE_RECEIVER);
            }
            (false, false) => continue,
        }
        tagged += 1;
    }

    tracing::debug!(tagged, total = edges.len(), "tagged network edges");
    edges
}

/// Collection shape tags taken from the source node's return type:
/// kind (`Stream`, `KeyedSingleton`, ...), `Keyed`, boundedness, ordering
pub fn tag_collection_edges(mut edges: Vec<Edge>, nodes: &[Node]) -> Vec<Edge> {
    for edge in &mut edges {
        let semantics = match node_at(nodes, edge.source).and_then(|n| n.semantics.as_ref()) {
            Some(semantics) => semantics,
            None => continue,
        };

        edge.add_tag(semantics.kind.as_str());
        if semantics.is_keyed() {
            edge.add_tag(tags::KEYED);
        }
        if let Some(boundedness) = semantics.boundedness {
            edge.add_tag(boundedness.as_str());
        }
        if let Some(ordering) = semantics.ordering {
            edge.add_tag(ordering.as_str());
        }
    }
    edges
}
