/*
 * Hierarchy cleanup passes
 *
 * prune_empty: drop containers whose subtree holds no nodes (roots stay).
 *
 * collapse_single_child_chains: a non-root container with exactly one child
 * and no direct members absorbs that child. The child's members move up, its
 * children are adopted, and the parent is renamed `parent→child`. Walking in
 * post-order collapses whole single-child spines in one pass:
 *
 *   file ─ fn leader ─ helper ─ batches      file ─ fn leader→helper→batches
 *
 * Both passes are idempotent.
 */

use crate::features::hierarchy::domain::{ContainerArena, ContainerId};

pub const COLLAPSE_SEPARATOR: &str = "→";

/// Remove every non-root container with an empty subtree. Returns how many
/// were removed.
pub fn prune_empty(arena: &mut ContainerArena) -> usize {
    let mut removed = 0;
    for root in arena.roots() {
        for id in arena.post_order(root) {
            if id == root {
                continue;
            }
            let container = arena.get(id);
            if container.members.is_empty() && container.children.is_empty() {
                arena.remove(id);
                removed += 1;
            }
        }
    }
    removed
}

/// Merge single-child chains below each root. Returns the number of merges.
pub fn collapse_single_child_chains(arena: &mut ContainerArena) -> usize {
    let mut merges = 0;
    for root in arena.roots() {
        for id in arena.post_order(root) {
            if id == root {
                continue;
            }
            while is_collapsible(arena, id) {
                let child = arena.get(id).children[0];
                merge_child(arena, id, child);
                merges += 1;
            }
        }
    }
    if merges > 0 {
        tracing::debug!(merges, "collapsed single-child containers");
    }
    merges
}

fn is_collapsible(arena: &ContainerArena, id: ContainerId) -> bool {
    let container = arena.get(id);
    container.parent.is_some() && container.members.is_empty() && container.children.len() == 1
}

fn merge_child(arena: &mut ContainerArena, parent: ContainerId, child: ContainerId) {
    let (child_name, child_members, grandchildren) = {
        let child = arena.get_mut(child);
        (
            child.name.clone(),
            std::mem::take(&mut child.members),
            std::mem::take(&mut child.children),
        )
    };

    for grandchild in &grandchildren {
        arena.get_mut(*grandchild).parent = Some(parent);
    }

    let container = arena.get_mut(parent);
    container.name = format!("{}{}{}", container.name, COLLAPSE_SEPARATOR, child_name);
    container.members.extend(child_members);
    container.children = grandchildren;

    let child = arena.get_mut(child);
    child.parent = None;
    child.removed = true;
}
