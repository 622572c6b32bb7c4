/*
 * Code Hierarchy
 *
 *   main.rs                 (file root, leftovers)
 *   ├─ fn leader            (standalone chains in `leader`)
 *   │  ├─ batches           (nodes of `let batches = ...`)
 *   │  └─ totals
 *   └─ (top-level)
 *
 * Variable assignment wins over function assignment; a node lands in the
 * first variable container that claims it. Empty containers are pruned and
 * single-child spines collapsed afterwards.
 */

use ahash::AHashMap;
use std::path::Path;

use super::collapse::{collapse_single_child_chains, prune_empty};
use crate::features::graph_builder::domain::{ChainNodes, ChainOwner};
use crate::features::hierarchy::domain::{ContainerArena, ContainerId};
use crate::shared::models::NodeId;
use crate::shared::ports::FunctionResolver;

pub const TOP_LEVEL: &str = "(top-level)";
pub const UNNAMED_FILE: &str = "(file)";

pub fn build_code_hierarchy(
    file_path: &str,
    chains: &[ChainNodes],
    node_count: usize,
    resolver: &dyn FunctionResolver,
) -> ContainerArena {
    let mut arena = ContainerArena::new();
    let root = arena.add(file_label(file_path), None);

    let mut functions: AHashMap<String, ContainerId> = AHashMap::new();
    let mut variables: AHashMap<(ContainerId, String), ContainerId> = AHashMap::new();
    let mut assigned: Vec<bool> = vec![false; node_count];

    let mut function_container = |arena: &mut ContainerArena, line: u32| -> ContainerId {
        let name = match resolver.enclosing_function(line) {
            Some(function) => format!("fn {}", function),
            None => TOP_LEVEL.to_string(),
        };
        *functions
            .entry(name)
            .or_insert_with_key(|name| arena.add(name.clone(), Some(root)))
    };

    for chain in chains {
        let variable = match &chain.owner {
            ChainOwner::Binding { variable, .. } => variable,
            ChainOwner::Standalone => continue,
        };
        let function = function_container(&mut arena, chain.line);
        let container = *variables
            .entry((function, variable.clone()))
            .or_insert_with(|| arena.add(variable.clone(), Some(function)));

        for node in &chain.nodes {
            if let Some(slot) = assigned.get_mut(node.index()) {
                if !*slot {
                    *slot = true;
                    arena.assign(container, *node);
                }
            }
        }
    }

    for chain in chains.iter().filter(|c| c.owner == ChainOwner::Standalone) {
        let function = function_container(&mut arena, chain.line);
        for node in &chain.nodes {
            if let Some(slot) = assigned.get_mut(node.index()) {
                if !*slot {
                    *slot = true;
                    arena.assign(function, *node);
                }
            }
        }
    }

    for (index, done) in assigned.iter().enumerate() {
        if !done {
            arena.assign(root, NodeId(index as u32));
        }
    }

    let pruned = prune_empty(&mut arena);
    let merged = collapse_single_child_chains(&mut arena);
    tracing::debug!(
        containers = arena.live_count(),
        pruned,
        merged,
        "built code hierarchy"
    );
    arena
}

/// File name without directories; `(file)` when there is none
fn file_label(file_path: &str) -> String {
    Path::new(file_path)
        .file_name()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or(UNNAMED_FILE)
        .to_string()
}
