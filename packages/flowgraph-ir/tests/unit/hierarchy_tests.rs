// Hierarchy Tests - Location and Code Hierarchies
//
// Test Categories:
// 1. Location hierarchy (bases, tick nesting, unknown bucket)
// 2. Code hierarchy (file / function / variable, collapse)
// 3. Completeness over whole pipeline inputs

#[path = "../common/mod.rs"]
mod common;

use common::*;
use flowgraph_ir::config::GraphConfig;
use flowgraph_ir::features::graph_builder::{AssembledGraph, GraphBuilder, TypeAnnotationIndex};
use flowgraph_ir::features::hierarchy::{
    collapse_single_child_chains, prune_empty, ContainerArena, HierarchyBuilder,
};
use flowgraph_ir::features::operator_classifier::OperatorClassifier;
use flowgraph_ir::shared::models::{
    ExtractionInput, Hierarchy, Node, NodeAssignment, NodeId, NodeType,
};
use flowgraph_ir::FunctionSpanIndex;
use pretty_assertions::assert_eq;

// ============================================================
// Test Helpers
// ============================================================

fn assemble(input: &ExtractionInput) -> AssembledGraph {
    let config = GraphConfig::default();
    let types = TypeAnnotationIndex::new(&input.type_annotations, &config);
    let resolver = FunctionSpanIndex::new(&input.function_spans);
    GraphBuilder::new(OperatorClassifier::default(), config).build(
        &input.bindings,
        &input.standalone_chains,
        &types,
        &resolver,
    )
}

fn code_hierarchy(input: &ExtractionInput) -> (Hierarchy, NodeAssignment) {
    let graph = assemble(input);
    let resolver = FunctionSpanIndex::new(&input.function_spans);
    HierarchyBuilder::new().code(&input.file_path, &graph, &resolver)
}

fn located(id: u32, location: &str, tick: Option<&str>) -> Node {
    let mut node = Node::new(NodeId(id), NodeType::Transform, "map");
    node.location_kind = Some(location.to_string());
    node.tick_variable = tick.map(str::to_string);
    node
}

fn assigned_name<'h>(hierarchy: &'h Hierarchy, assignment: &NodeAssignment, node: u32) -> &'h str {
    let id = &assignment[&NodeId(node)];
    hierarchy.find(id).map(|c| c.name.as_str()).unwrap_or("<missing>")
}

// ============================================================
// 1. Location Hierarchy
// ============================================================

#[test]
fn test_paxos_location_hierarchy() {
    let graph = assemble(&fixture_paxos_leader());
    let (hierarchy, assignment) = HierarchyBuilder::new().location(&graph.nodes);

    assert_eq!(hierarchy.id, "location");
    assert_eq!(
        root_names(&hierarchy),
        vec!["Acceptor", "Leader", "(unknown location)"]
    );
    assert_eq!(
        hierarchy.container_ids(),
        vec!["loc_0", "loc_1", "loc_2", "loc_3", "loc_4"]
    );

    let acceptor = &hierarchy.children[0];
    let tick_names: Vec<&str> = acceptor.children.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(tick_names, vec!["tick", "Tick<Acceptor>"]);

    assert_eq!(assigned_name(&hierarchy, &assignment, 0), "Leader");
    assert_eq!(assigned_name(&hierarchy, &assignment, 2), "Acceptor");
    assert_eq!(assigned_name(&hierarchy, &assignment, 3), "tick");
    // fold has a tick type but no tick argument of its own
    assert_eq!(assigned_name(&hierarchy, &assignment, 4), "Tick<Acceptor>");
    assert_eq!(assigned_name(&hierarchy, &assignment, 5), "Acceptor");
    assert_eq!(assigned_name(&hierarchy, &assignment, 8), "(unknown location)");
}

#[test]
fn test_nested_ticks() {
    let nodes = vec![
        located(0, "Process<Leader>", None),
        located(1, "Tick<Process<Leader>>", Some("leader::outer")),
        located(2, "Tick<Tick<Process<Leader>>>", Some("leader::outer")),
    ];
    let (hierarchy, assignment) = HierarchyBuilder::new().location(&nodes);

    let leader = &hierarchy.children[0];
    assert_eq!(leader.name, "Leader");
    assert_eq!(leader.children[0].name, "outer");
    assert_eq!(leader.children[0].children[0].name, "outer");
    assert_eq!(assignment[&NodeId(2)], leader.children[0].children[0].id);
}

#[test]
fn test_tick_without_variable() {
    let nodes = vec![located(0, "Tick<Tick<Cluster<Worker>>>", None)];
    let (hierarchy, assignment) = HierarchyBuilder::new().location(&nodes);

    // no depth-1 container exists, so the depth-2 one hangs off the base
    let worker = &hierarchy.children[0];
    assert_eq!(worker.name, "Worker");
    assert_eq!(worker.children.len(), 1);
    assert_eq!(worker.children[0].name, "Tick<Tick<Worker>>");
    assert_eq!(assignment[&NodeId(0)], worker.children[0].id);
}

#[test]
fn test_empty_location_hierarchy_has_default() {
    let (hierarchy, assignment) = HierarchyBuilder::new().location(&[]);
    assert_eq!(root_names(&hierarchy), vec!["(default)"]);
    assert!(assignment.is_empty());
}

// ============================================================
// 2. Code Hierarchy
// ============================================================

#[test]
fn test_paxos_code_hierarchy() {
    let (hierarchy, assignment) = code_hierarchy(&fixture_paxos_leader());

    assert_eq!(hierarchy.id, "code");
    assert_eq!(root_names(&hierarchy), vec!["paxos.rs"]);
    let file = &hierarchy.children[0];
    let functions: Vec<&str> = file.children.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(functions, vec!["fn leader", "fn main"]);

    let leader = &file.children[0];
    let variables: Vec<&str> = leader.children.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(variables, vec!["ballots", "batch"]);

    assert_eq!(assigned_name(&hierarchy, &assignment, 0), "ballots");
    assert_eq!(assigned_name(&hierarchy, &assignment, 4), "batch");
    assert_eq!(assigned_name(&hierarchy, &assignment, 5), "fn leader");
    assert_eq!(assigned_name(&hierarchy, &assignment, 8), "fn main");
}

#[test]
fn test_single_binding_spine_collapses() {
    let (hierarchy, assignment) = code_hierarchy(&fixture_single_binding());

    let file = &hierarchy.children[0];
    assert_eq!(file.name, "helper.rs");
    assert_eq!(file.children.len(), 1);
    assert_eq!(file.children[0].name, "fn helper→numbers");
    assert!(file.children[0].children.is_empty());
    assert_eq!(assignment[&NodeId(0)], file.children[0].id);
    assert_eq!(assignment[&NodeId(1)], file.children[0].id);
}

#[test]
fn test_deep_spine_collapses_to_one_container() {
    let mut arena = ContainerArena::new();
    let file = arena.add("main.rs", None);
    let function = arena.add("fn run", Some(file));
    let helper = arena.add("helper", Some(function));
    let variable = arena.add("batches", Some(helper));
    arena.assign(variable, NodeId(0));
    arena.assign(variable, NodeId(1));

    assert_eq!(prune_empty(&mut arena), 0);
    assert_eq!(collapse_single_child_chains(&mut arena), 2);
    // idempotent
    assert_eq!(collapse_single_child_chains(&mut arena), 0);

    let (hierarchy, assignment) = arena.render("code", "Code", "code");
    let root = &hierarchy.children[0];
    assert_eq!(root.children.len(), 1);
    assert_eq!(root.children[0].name, "fn run→helper→batches");
    assert_eq!(assignment.len(), 2);
    assert!(assignment.values().all(|c| c == &root.children[0].id));
}

#[test]
fn test_top_level_chain() {
    let input = InputBuilder::new("script.rs")
        .standalone(ChainBuilder::at(1).op("source_iter").op("for_each"))
        .build();
    let (hierarchy, _) = code_hierarchy(&input);
    let file = &hierarchy.children[0];
    assert_eq!(file.children[0].name, "(top-level)");
}

#[test]
fn test_empty_code_hierarchy_keeps_file() {
    let (hierarchy, assignment) = code_hierarchy(&ExtractionInput::new("src/lib.rs"));
    assert_eq!(root_names(&hierarchy), vec!["lib.rs"]);
    assert_eq!(hierarchy.container_count(), 1);
    assert!(assignment.is_empty());
}

// ============================================================
// 3. Completeness
// ============================================================

#[test]
fn test_every_node_assigned_once_per_hierarchy() {
    for input in [
        fixture_paxos_leader(),
        fixture_single_binding(),
        fixture_linear_bindings(7),
    ] {
        let graph = assemble(&input);
        let resolver = FunctionSpanIndex::new(&input.function_spans);
        for (hierarchy, assignment) in
            HierarchyBuilder::new().build_all(&input.file_path, &graph, &resolver)
        {
            assert_eq!(assignment.len(), graph.nodes.len(), "{}", hierarchy.id);
            let ids = hierarchy.container_ids();
            assert!(assignment.values().all(|c| ids.contains(&c.as_str())));
        }
    }
}
