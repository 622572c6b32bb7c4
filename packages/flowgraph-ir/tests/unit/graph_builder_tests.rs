// Graph Builder Tests - Assembly, Dedup, Cross-Chain Links, Edge Tags
//
// Test Categories:
// 1. Basic Functionality
// 2. Edge Cases (empty, all-skipped, unresolved references)
// 3. Type Matching
// 4. Edge Semantic Tags

#[path = "../common/mod.rs"]
mod common;

use common::*;
use flowgraph_ir::config::GraphConfig;
use flowgraph_ir::features::graph_builder::{
    tag_collection_edges, tag_network_edges, AssembledGraph, ChainOwner, GraphBuilder,
    TypeAnnotationIndex,
};
use flowgraph_ir::features::operator_classifier::OperatorClassifier;
use flowgraph_ir::shared::models::{
    tags, ExtractionInput, NodeId, NodeType, OperatorKey, TypeAnnotation,
};
use flowgraph_ir::{FunctionSpanIndex, TopLevelOnly};
use pretty_assertions::assert_eq;

// ============================================================
// Test Helpers
// ============================================================

fn assemble(input: &ExtractionInput) -> AssembledGraph {
    assemble_with(input, GraphConfig::default())
}

fn assemble_with(input: &ExtractionInput, config: GraphConfig) -> AssembledGraph {
    let types = TypeAnnotationIndex::new(&input.type_annotations, &config);
    let resolver = FunctionSpanIndex::new(&input.function_spans);
    GraphBuilder::new(OperatorClassifier::default(), config).build(
        &input.bindings,
        &input.standalone_chains,
        &types,
        &resolver,
    )
}

fn pairs(graph: &AssembledGraph) -> Vec<(u32, u32)> {
    graph.edges.iter().map(|e| (e.source.0, e.target.0)).collect()
}

fn labels(graph: &AssembledGraph) -> Vec<&str> {
    graph.nodes.iter().map(|n| n.short_label.as_str()).collect()
}

// ============================================================
// 1. Basic Functionality
// ============================================================

#[test]
fn test_paxos_nodes_in_source_order() {
    let graph = assemble(&fixture_paxos_leader());

    assert_eq!(
        labels(&graph),
        vec![
            "source_iter",
            "map",
            "send_bincode",
            "batch",
            "fold",
            "all_ticks",
            "for_each",
            "source_iter",
            "for_each",
        ]
    );
    for (i, node) in graph.nodes.iter().enumerate() {
        assert_eq!(node.id, NodeId(i as u32));
    }
}

#[test]
fn test_paxos_edges() {
    let graph = assemble(&fixture_paxos_leader());

    // chain edges come before the chain's cross-chain edge
    assert_eq!(
        pairs(&graph),
        vec![(0, 1), (1, 2), (3, 4), (2, 3), (5, 6), (4, 5), (7, 8)]
    );
    assert_eq!(graph.stats.cross_chain_edges, 2);
    assert_eq!(graph.stats.operators_seen, 10);
    assert_eq!(graph.stats.operators_skipped, 1);
    assert_eq!(graph.stats.nodes, 9);
    assert_eq!(graph.stats.edges, 7);
}

#[test]
fn test_node_types() {
    let graph = assemble(&fixture_paxos_leader());
    let types: Vec<NodeType> = graph.nodes.iter().map(|n| n.node_type).collect();
    assert_eq!(
        types,
        vec![
            NodeType::Source,
            NodeType::Transform,
            NodeType::Network,
            NodeType::Transform,
            NodeType::Aggregation,
            NodeType::Transform,
            NodeType::Sink,
            NodeType::Source,
            NodeType::Sink,
        ]
    );
}

#[test]
fn test_tick_variable_on_temporal_operator_only() {
    let graph = assemble(&fixture_paxos_leader());
    let ticks: Vec<Option<&str>> = graph.nodes.iter().map(|n| n.tick_variable.as_deref()).collect();

    assert_eq!(ticks[3], Some("leader::tick"));
    assert_eq!(ticks[4], None);
    assert_eq!(ticks[5], None);
    assert_eq!(ticks[0], None);
}

#[test]
fn test_tick_propagation_ends_outside_tick() {
    // batch(&tick) -> fold -> all_ticks -> for_each
    let input = InputBuilder::new("src/leader.rs")
        .function("leader", 1, 20)
        .standalone(
            ChainBuilder::at(4)
                .typed("source_iter", LEADER_STREAM)
                .typed("batch", "Stream<u32, Tick<Process<'a, Leader>>, Bounded>")
                .tick("&tick")
                .typed("fold", "Singleton<u32, Tick<Process<'a, Leader>>, Bounded>")
                .typed("all_ticks", LEADER_STREAM)
                .op("for_each"),
        )
        .build();
    let config = GraphConfig {
        propagate_tick_variables: true,
        ..GraphConfig::default()
    };
    let graph = assemble_with(&input, config);
    let ticks: Vec<Option<&str>> = graph.nodes.iter().map(|n| n.tick_variable.as_deref()).collect();

    assert_eq!(
        ticks,
        vec![None, Some("leader::tick"), Some("leader::tick"), None, None]
    );
}

#[test]
fn test_producers_and_chains() {
    let graph = assemble(&fixture_paxos_leader());

    assert_eq!(graph.producers.get("ballots"), Some(&NodeId(2)));
    assert_eq!(graph.producers.get("batch"), Some(&NodeId(4)));
    assert_eq!(graph.chains.len(), 4);
    assert_eq!(graph.chains[0].owner.variable(), Some("ballots"));
    assert_eq!(graph.chains[2].owner, ChainOwner::Standalone);
    assert_eq!(graph.chains[3].nodes, vec![NodeId(7), NodeId(8)]);
}

#[test]
fn test_rebuild_is_deterministic() {
    let input = fixture_paxos_leader();
    let first = assemble(&input);
    let second = assemble(&input);

    assert_eq!(first.nodes, second.nodes);
    assert_eq!(first.edges, second.edges);
}

#[test]
fn test_shared_occurrence_is_one_node() {
    // The same call reported by a binding and a standalone chain
    let input = InputBuilder::new("dup.rs")
        .bind("xs", ChainBuilder::at(2).op("source_iter").op("map"))
        .standalone(ChainBuilder::at(2).op("source_iter").op("map").op("for_each"))
        .build();
    let graph = assemble(&input);

    assert_eq!(labels(&graph), vec!["source_iter", "map", "for_each"]);
    assert_eq!(pairs(&graph), vec![(0, 1), (1, 2)]);
}

// ============================================================
// 2. Edge Cases
// ============================================================

#[test]
fn test_empty_input() {
    let graph = assemble(&ExtractionInput::new("empty.rs"));
    assert!(graph.is_empty());
    assert!(graph.edges.is_empty());
    assert!(graph.chains.is_empty());
}

#[test]
fn test_all_skipped_chain() {
    let input = InputBuilder::new("skip.rs")
        .bind("s", ChainBuilder::at(1).op("to_string").op("unwrap").op("len"))
        .build();
    let graph = assemble(&input);

    assert!(graph.nodes.is_empty());
    assert!(graph.edges.is_empty());
    assert_eq!(graph.stats.operators_skipped, 3);
    assert!(graph.producers.is_empty());
}

#[test]
fn test_unresolved_reference_adds_no_edge() {
    let input = InputBuilder::new("orphan.rs")
        .standalone(
            ChainBuilder::at(3)
                .op("map")
                .text("undefined_stream.map(|x| x)")
                .op("for_each"),
        )
        .build();
    let graph = assemble(&input);

    assert_eq!(pairs(&graph), vec![(0, 1)]);
    assert_eq!(graph.stats.cross_chain_edges, 0);
}

#[test]
fn test_reference_through_preceding_text() {
    let input = InputBuilder::new("cont.rs")
        .bind("words", ChainBuilder::at(1).op("source_iter"))
        .standalone(ChainBuilder::at(3).op("for_each").preceded_by("    words\n        ."))
        .build();
    let graph = assemble(&input);

    assert_eq!(pairs(&graph), vec![(0, 1)]);
}

#[test]
fn test_longest_variable_name_wins() {
    let input = InputBuilder::new("names.rs")
        .bind("a", ChainBuilder::at(1).op("source_iter"))
        .bind("a_b", ChainBuilder::at(2).op("source_iter"))
        .standalone(ChainBuilder::at(4).op("for_each").text("a_b.for_each(drop)"))
        .build();
    let graph = assemble(&input);

    assert_eq!(pairs(&graph), vec![(1, 2)]);
}

#[test]
fn test_linear_bindings_chain_together() {
    let graph = assemble(&fixture_linear_bindings(5));
    assert_eq!(graph.nodes.len(), 10);
    assert_eq!(graph.edges.len(), 9);
    assert_eq!(graph.stats.cross_chain_edges, 4);
}

// ============================================================
// 3. Type Matching
// ============================================================

#[test]
fn test_typed_nodes_have_locations() {
    let graph = assemble(&fixture_paxos_leader());

    let locations: Vec<Option<&str>> = graph
        .nodes
        .iter()
        .map(|n| n.location_kind.as_deref())
        .collect();
    assert_eq!(
        locations,
        vec![
            Some("Process<Leader>"),
            Some("Process<Leader>"),
            Some("Cluster<Acceptor>"),
            Some("Tick<Cluster<Acceptor>>"),
            Some("Tick<Cluster<Acceptor>>"),
            Some("Cluster<Acceptor>"),
            None,
            None,
            None,
        ]
    );
    assert_eq!(graph.stats.typed_nodes, 6);
}

#[test]
fn test_nearby_annotation_is_used() {
    // Type oracle reports the hover position two columns off
    let input = InputBuilder::new("near.rs")
        .standalone(ChainBuilder::at(4).op("source_iter"))
        .annotation(TypeAnnotation::new(4, 22, "source_iter", fixture_stream()))
        .build();
    let graph = assemble(&input);
    assert_eq!(graph.nodes[0].location_kind.as_deref(), Some("Process<Leader>"));
}

#[test]
fn test_distant_annotation_is_ignored() {
    let input = InputBuilder::new("far.rs")
        .standalone(ChainBuilder::at(4).op("source_iter"))
        .annotation(TypeAnnotation::new(9, 20, "source_iter", fixture_stream()))
        .build();
    let graph = assemble(&input);
    assert_eq!(graph.nodes[0].location_kind, None);
}

#[test]
fn test_index_lookup() {
    let index = TypeAnnotationIndex::new(
        &[TypeAnnotation::new(1, 5, "map", "A"), TypeAnnotation::new(1, 5, "map", "B")],
        &GraphConfig::default(),
    );
    assert_eq!(index.len(), 2);
    // first report for a position wins
    assert_eq!(index.lookup(&OperatorKey::new(1, 5, "map")), Some("A"));
}

fn fixture_stream() -> &'static str {
    LEADER_STREAM
}

// ============================================================
// 4. Edge Semantic Tags
// ============================================================

#[test]
fn test_network_and_collection_tags() {
    let graph = assemble(&fixture_paxos_leader());
    let classifier = OperatorClassifier::default();
    let edges = tag_network_edges(graph.edges.clone(), &graph.nodes, &classifier);
    let edges = tag_collection_edges(edges, &graph.nodes);

    let tag_list = |i: usize| -> Vec<&str> {
        edges[i].semantic_tags.iter().map(String::as_str).collect()
    };

    // map -> send_bincode
    let into_network = tag_list(1);
    assert!(into_network.contains(&tags::NETWORK));
    assert!(into_network.contains(&tags::NETWORK_TARGET));
    assert!(into_network.contains(&tags::REMOTE_RECEIVER));
    assert!(into_network.contains(&"Stream"));

    // send_bincode -> batch
    let out_of_network = tag_list(3);
    assert!(out_of_network.contains(&tags::NETWORK_SOURCE));
    assert!(out_of_network.contains(&tags::REMOTE_SENDER));
    assert!(out_of_network.contains(&"NoOrder"));
    assert!(out_of_network.contains(&"Unbounded"));

    // batch -> fold stays local
    let local = tag_list(2);
    assert!(!local.contains(&tags::NETWORK));
    assert!(local.contains(&"Bounded"));

    // untyped source_iter -> for_each carries no tags
    assert!(edges[6].semantic_tags.is_empty());
}

#[test]
fn test_tags_sorted() {
    let graph = assemble(&fixture_paxos_leader());
    let edges = tag_collection_edges(
        tag_network_edges(graph.edges, &graph.nodes, &OperatorClassifier::default()),
        &graph.nodes,
    );
    for edge in &edges {
        let tags: Vec<&String> = edge.semantic_tags.iter().collect();
        let mut sorted = tags.clone();
        sorted.sort();
        assert_eq!(tags, sorted);
    }
}

#[test]
fn test_untyped_graph_without_resolver() {
    let input = InputBuilder::new("plain.rs")
        .standalone(ChainBuilder::at(1).op("source_iter").tick("tick").op("for_each"))
        .build();
    let types = TypeAnnotationIndex::default();
    let graph = GraphBuilder::new(OperatorClassifier::default(), GraphConfig::default()).build(
        &input.bindings,
        &input.standalone_chains,
        &types,
        &TopLevelOnly,
    );
    assert_eq!(graph.nodes[0].tick_variable.as_deref(), Some("tick"));
}
