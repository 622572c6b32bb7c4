//! Container arena
//!
//! Hierarchy containers live in one vector and refer to each other by
//! `ContainerId`. Parent/child links are indices, so finding a container is
//! a slice index and a cycle cannot be expressed. Removed containers stay in
//! the vector (ids remain stable) and are skipped when rendering.

use std::collections::BTreeMap;

use crate::shared::models::{Hierarchy, HierarchyContainer, NodeAssignment, NodeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContainerId(pub u32);

impl ContainerId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub id: ContainerId,
    pub name: String,
    pub parent: Option<ContainerId>,
    pub children: Vec<ContainerId>,
    /// Nodes assigned directly to this container
    pub members: Vec<NodeId>,
    pub removed: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ContainerArena {
    containers: Vec<Container>,
}

impl ContainerArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// New container, appended to `parent`'s children when given
    pub fn add(&mut self, name: impl Into<String>, parent: Option<ContainerId>) -> ContainerId {
        let id = ContainerId(self.containers.len() as u32);
        self.containers.push(Container {
            id,
            name: name.into(),
            parent,
            children: Vec::new(),
            members: Vec::new(),
            removed: false,
        });
        if let Some(parent) = parent {
            self.containers[parent.index()].children.push(id);
        }
        id
    }

    pub fn get(&self, id: ContainerId) -> &Container {
        &self.containers[id.index()]
    }

    pub fn get_mut(&mut self, id: ContainerId) -> &mut Container {
        &mut self.containers[id.index()]
    }

    pub fn assign(&mut self, id: ContainerId, node: NodeId) {
        self.containers[id.index()].members.push(node);
    }

    /// Live top-level containers in creation order
    pub fn roots(&self) -> Vec<ContainerId> {
        self.containers
            .iter()
            .filter(|c| c.parent.is_none() && !c.removed)
            .map(|c| c.id)
            .collect()
    }

    /// Number of live containers
    pub fn live_count(&self) -> usize {
        self.containers.iter().filter(|c| !c.removed).count()
    }

    pub fn is_empty(&self) -> bool {
        self.live_count() == 0
    }

    /// Detach `id` from its parent and mark it removed
    pub fn remove(&mut self, id: ContainerId) {
        if let Some(parent) = self.containers[id.index()].parent {
            self.containers[parent.index()].children.retain(|c| *c != id);
        }
        self.containers[id.index()].removed = true;
    }

    /// Direct members of `id` and all of its descendants
    pub fn subtree_member_count(&self, id: ContainerId) -> usize {
        let container = self.get(id);
        container.members.len()
            + container
                .children
                .iter()
                .map(|child| self.subtree_member_count(*child))
                .sum::<usize>()
    }

    /// Containers below `root` in post-order (children before parents),
    /// `root` itself last
    pub fn post_order(&self, root: ContainerId) -> Vec<ContainerId> {
        let mut order = Vec::new();
        let mut stack = vec![(root, false)];
        while let Some((id, expanded)) = stack.pop() {
            if expanded {
                order.push(id);
                continue;
            }
            stack.push((id, true));
            for child in self.get(id).children.iter().rev() {
                stack.push((*child, false));
            }
        }
        order
    }

    /// Render as a `Hierarchy` with ids `{prefix}_{n}` numbered in pre-order,
    /// plus the node assignment map
    pub fn render(&self, id: &str, name: &str, prefix: &str) -> (Hierarchy, NodeAssignment) {
        let mut next = 0usize;
        let mut external: BTreeMap<ContainerId, String> = BTreeMap::new();
        let children = self
            .roots()
            .into_iter()
            .map(|root| self.render_container(root, prefix, &mut next, &mut external))
            .collect();

        let mut assignment = NodeAssignment::new();
        for (container, external_id) in &external {
            for node in &self.get(*container).members {
                assignment.insert(*node, external_id.clone());
            }
        }

        let hierarchy = Hierarchy {
            id: id.to_string(),
            name: name.to_string(),
            children,
        };
        (hierarchy, assignment)
    }

    fn render_container(
        &self,
        id: ContainerId,
        prefix: &str,
        next: &mut usize,
        external: &mut BTreeMap<ContainerId, String>,
    ) -> HierarchyContainer {
        let container = self.get(id);
        let external_id = format!("{}_{}", prefix, next);
        *next += 1;
        external.insert(id, external_id.clone());

        HierarchyContainer {
            id: external_id,
            name: container.name.clone(),
            children: container
                .children
                .iter()
                .map(|child| self.render_container(*child, prefix, next, external))
                .collect(),
        }
    }
}
