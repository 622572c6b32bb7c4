/*
 * Location Hierarchy
 *
 * Groups nodes by where their data lives:
 *
 *   Leader                      (base root, depth-0 nodes)
 *   ├─ tick                     (depth 1, tick variable `leader::tick`)
 *   │  └─ inner                 (depth 2, nested tick variable)
 *   └─ Tick<Leader>             (depth 1, no tick variable known)
 *   (unknown location)          (nodes without a location type)
 *
 * A tick container is parented under the container holding the same tick
 * variable one level up, or under the base root when there is none.
 */

use ahash::AHashMap;
use std::collections::BTreeMap;

use crate::features::hierarchy::domain::{ContainerArena, ContainerId};
use crate::features::type_parsing::parse_location_label;
use crate::shared::models::{Node, NodeId};

pub const UNKNOWN_LOCATION: &str = "(unknown location)";
pub const DEFAULT_CONTAINER: &str = "(default)";
const UNKNOWN_TICK: &str = "_unknown_";

struct Placed {
    node: NodeId,
    depth: usize,
    tick: String,
}

pub fn build_location_hierarchy(nodes: &[Node]) -> ContainerArena {
    let mut arena = ContainerArena::new();

    let mut groups: BTreeMap<String, Vec<Placed>> = BTreeMap::new();
    let mut unlocated: Vec<NodeId> = Vec::new();

    for node in nodes {
        match node.location_kind.as_deref() {
            Some(kind) => {
                let label = parse_location_label(kind);
                groups.entry(label.base).or_default().push(Placed {
                    node: node.id,
                    depth: label.tick_depth,
                    tick: node
                        .tick_variable
                        .clone()
                        .unwrap_or_else(|| UNKNOWN_TICK.to_string()),
                });
            }
            None => unlocated.push(node.id),
        }
    }

    for (base, placed) in &groups {
        build_base_group(&mut arena, base, placed);
    }

    if !unlocated.is_empty() {
        let unknown = arena.add(UNKNOWN_LOCATION, None);
        for node in unlocated {
            arena.assign(unknown, node);
        }
    }

    if arena.is_empty() {
        arena.add(DEFAULT_CONTAINER, None);
    }

    tracing::debug!(
        bases = groups.len(),
        containers = arena.live_count(),
        "built location hierarchy"
    );
    arena
}

fn build_base_group(arena: &mut ContainerArena, base: &str, placed: &[Placed]) {
    let root = arena.add(base, None);
    let max_depth = placed.iter().map(|p| p.depth).max().unwrap_or(0);

    // (depth, tick variable) -> container
    let mut levels: AHashMap<(usize, &str), ContainerId> = AHashMap::new();

    for depth in 1..=max_depth {
        for p in placed.iter().filter(|p| p.depth == depth) {
            let key = (depth, p.tick.as_str());
            if levels.contains_key(&key) {
                continue;
            }
            let parent = levels
                .get(&(depth - 1, p.tick.as_str()))
                .copied()
                .unwrap_or(root);
            let container = arena.add(tick_container_name(base, &p.tick, depth), Some(parent));
            levels.insert(key, container);
        }
    }

    for p in placed {
        let container = if p.depth == 0 {
            root
        } else {
            levels
                .get(&(p.depth, p.tick.as_str()))
                .copied()
                .unwrap_or(root)
        };
        arena.assign(container, p.node);
    }
}

fn tick_container_name(base: &str, tick: &str, depth: usize) -> String {
    if tick == UNKNOWN_TICK {
        let mut name = String::with_capacity(base.len() + depth * 6);
        for _ in 0..depth {
            name.push_str("Tick<");
        }
        name.push_str(base);
        for _ in 0..depth {
            name.push('>');
        }
        name
    } else {
        match tick.rfind("::") {
            Some(i) => tick[i + 2..].to_string(),
            None => tick.to_string(),
        }
    }
}
