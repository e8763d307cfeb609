//! # Component Tree
//!
//! A page's component hierarchy, held as a flat arena of nodes keyed by id.
//! Parent and child links are explicit fields, so structural operations only
//! touch the child list of one parent (plus the subtree itself for duplicate
//! and remove).
//!
//! ## Invariants
//!
//! - exactly one root, of kind `Canvas`, with no parent
//! - every other node has exactly one parent, and the parent lists it once
//! - only container kinds have children
//! - every node is reachable from the root (no cycles, no orphans)
//!
//! Every public mutation validates before it touches the arena, so a failed
//! call leaves the tree unchanged.

use crate::errors::MutationError;
use crate::id_generator::IDGenerator;
use crate::kind::ComponentKind;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

pub type NodeId = String;

/// Kind-specific configuration values
pub type Props = BTreeMap<String, serde_json::Value>;

/// Single addressable element of a component tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,

    #[serde(rename = "type")]
    pub kind: ComponentKind,

    #[serde(default)]
    pub props: Props,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<NodeId>,

    /// Ordered children; order is render and tab order
    #[serde(default)]
    pub children: Vec<NodeId>,
}

impl Node {
    pub fn is_container(&self) -> bool {
        self.kind.is_container()
    }
}

/// Position of a node among its siblings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub parent: Option<NodeId>,
    pub siblings: Vec<NodeId>,
    pub index: usize,
}

impl Location {
    pub fn total(&self) -> usize {
        self.siblings.len()
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.siblings.len()
    }
}

/// Id-free structural view of a subtree, used to compare copies
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub kind: ComponentKind,
    pub props: Props,
    pub children: Vec<Shape>,
}

#[derive(Debug, Clone)]
pub struct Tree {
    nodes: HashMap<NodeId, Node>,
    root: NodeId,
    ids: IDGenerator,
}

impl Tree {
    /// Empty tree containing only the root container
    pub fn new(label: &str) -> Self {
        let ids = IDGenerator::new(label);
        let root = ids.root_id();
        let mut nodes = HashMap::new();
        nodes.insert(
            root.clone(),
            Node {
                id: root.clone(),
                kind: ComponentKind::Canvas,
                props: Props::new(),
                parent: None,
                children: Vec::new(),
            },
        );
        Self { nodes, root, ids }
    }

    /// Assemble a tree from decoded parts, checking every invariant
    pub fn from_parts(seed: String, root: NodeId, nodes: Vec<Node>) -> Result<Self, String> {
        let count = nodes.len() as u64;
        let mut map = HashMap::with_capacity(nodes.len());
        for node in nodes {
            if let Some(dup) = map.insert(node.id.clone(), node) {
                return Err(format!("duplicate node id '{}'", dup.id));
            }
        }

        let tree = Self {
            nodes: map,
            root,
            ids: IDGenerator::resume(seed, count),
        };
        tree.check_invariants()?;
        Ok(tree)
    }

    pub fn root_id(&self) -> &str {
        &self.root
    }

    pub fn root(&self) -> &Node {
        &self.nodes[&self.root]
    }

    pub fn seed(&self) -> &str {
        self.ids.seed()
    }

    pub fn get(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the root holds no components
    pub fn has_no_components(&self) -> bool {
        self.root().children.is_empty()
    }

    pub fn is_root(&self, id: &str) -> bool {
        self.root == id
    }

    /// All nodes, in no particular order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// All nodes except the root
    pub fn non_root_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values().filter(move |n| n.id != self.root)
    }

    /// Pre-order ids of `id`'s subtree, `id` first
    pub fn descendants(&self, id: &str) -> Result<Vec<NodeId>, MutationError> {
        let start = self.node(id)?;
        let mut out = Vec::new();
        let mut stack = vec![start.id.clone()];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.get(&current) {
                stack.extend(node.children.iter().rev().cloned());
            }
            out.push(current);
        }
        Ok(out)
    }

    /// First reserved kind found in the subtree rooted at `id`, the node itself included
    pub fn reserved_in_subtree(&self, id: &str) -> Result<Option<ComponentKind>, MutationError> {
        Ok(self
            .descendants(id)?
            .iter()
            .filter_map(|n| self.nodes.get(n))
            .map(|n| n.kind)
            .find(|k| k.is_reserved()))
    }

    pub fn shape(&self, id: &str) -> Option<Shape> {
        let node = self.nodes.get(id)?;
        let children = node
            .children
            .iter()
            .map(|child| self.shape(child))
            .collect::<Option<Vec<_>>>()?;
        Some(Shape {
            kind: node.kind,
            props: node.props.clone(),
            children,
        })
    }

    /// Same kinds, props and ordering from the root down, ignoring ids
    pub fn structurally_eq(&self, other: &Tree) -> bool {
        self.shape(self.root_id()) == other.shape(other.root_id())
    }

    /// Resolve a node's position among its siblings
    pub fn locate(&self, id: &str) -> Result<Location, MutationError> {
        let node = self.node(id)?;
        let Some(parent_id) = &node.parent else {
            return Ok(Location {
                parent: None,
                siblings: Vec::new(),
                index: 0,
            });
        };

        let parent = self.node(parent_id)?;
        let index = parent
            .children
            .iter()
            .position(|c| c == id)
            .ok_or_else(|| {
                MutationError::InvalidOperation(format!(
                    "node '{}' is missing from its parent's children",
                    id
                ))
            })?;

        Ok(Location {
            parent: Some(parent_id.clone()),
            siblings: parent.children.clone(),
            index,
        })
    }

    /// Swap with the previous sibling. Returns false at the boundary or on the root.
    pub fn move_up(&mut self, id: &str) -> Result<bool, MutationError> {
        let location = self.locate(id)?;
        let Some(parent_id) = location.parent.as_deref() else {
            return Ok(false);
        };
        if location.is_first() {
            return Ok(false);
        }
        self.reposition(parent_id, location.index, location.index - 1);
        Ok(true)
    }

    /// Swap with the next sibling. Returns false at the boundary or on the root.
    pub fn move_down(&mut self, id: &str) -> Result<bool, MutationError> {
        let location = self.locate(id)?;
        let Some(parent_id) = location.parent.as_deref() else {
            return Ok(false);
        };
        if location.is_last() {
            return Ok(false);
        }
        // Reinserting at index + 1 after the removal puts the node right
        // after its old next sibling, swapping the two
        self.reposition(parent_id, location.index, location.index + 1);
        Ok(true)
    }

    fn reposition(&mut self, parent_id: &str, from: usize, to: usize) {
        if let Some(parent) = self.nodes.get_mut(parent_id) {
            let moved = parent.children.remove(from);
            parent.children.insert(to, moved);
        }
    }

    /// Deep-copy a subtree with fresh ids and insert it right after the original
    pub fn duplicate(&mut self, id: &str) -> Result<NodeId, MutationError> {
        let location = self.locate(id)?;
        let Some(parent_id) = location.parent else {
            return Err(MutationError::InvalidOperation(
                "cannot duplicate the root container".to_string(),
            ));
        };

        let originals = self.descendants(id)?;
        let mut remap = HashMap::with_capacity(originals.len());
        for old in &originals {
            let fresh = self.fresh_id();
            remap.insert(old.clone(), fresh);
        }

        let mut copies = Vec::with_capacity(originals.len());
        for old in &originals {
            let source = &self.nodes[old];
            let parent = if old == id {
                Some(parent_id.clone())
            } else {
                source.parent.as_ref().map(|p| remap[p].clone())
            };
            copies.push(Node {
                id: remap[old].clone(),
                kind: source.kind,
                props: source.props.clone(),
                parent,
                children: source.children.iter().map(|c| remap[c].clone()).collect(),
            });
        }

        let copy_id = remap[id].clone();
        for node in copies {
            self.nodes.insert(node.id.clone(), node);
        }
        if let Some(parent) = self.nodes.get_mut(&parent_id) {
            parent.children.insert(location.index + 1, copy_id.clone());
        }

        tracing::debug!(source = %id, copy = %copy_id, nodes = originals.len(), "Duplicated subtree");
        Ok(copy_id)
    }

    /// Delete a node and its whole subtree. Returns the removed ids.
    pub fn remove(&mut self, id: &str) -> Result<Vec<NodeId>, MutationError> {
        let node = self.node(id)?;
        if node.parent.is_none() {
            return Err(MutationError::InvalidOperation(
                "cannot remove the root container".to_string(),
            ));
        }
        if let Some(kind) = self.reserved_in_subtree(id)? {
            return Err(MutationError::InvalidOperation(format!(
                "{} nodes cannot be removed",
                kind
            )));
        }

        let location = self.locate(id)?;
        let removed = self.descendants(id)?;
        if let Some(parent) = location.parent.as_ref().and_then(|p| self.nodes.get_mut(p)) {
            parent.children.remove(location.index);
        }
        for gone in &removed {
            self.nodes.remove(gone);
        }
        Ok(removed)
    }

    /// Place a new component under `parent_id`. `index` is clamped to the child count.
    pub fn insert(
        &mut self,
        parent_id: &str,
        index: usize,
        kind: ComponentKind,
        props: Props,
    ) -> Result<NodeId, MutationError> {
        if kind == ComponentKind::Canvas {
            return Err(MutationError::InvalidOperation(
                "a tree has exactly one Canvas".to_string(),
            ));
        }
        let parent = self
            .nodes
            .get(parent_id)
            .ok_or_else(|| MutationError::ParentNotFound(parent_id.to_string()))?;
        if !parent.is_container() {
            return Err(MutationError::NotAContainer(parent_id.to_string()));
        }

        let id = self.fresh_id();
        self.nodes.insert(
            id.clone(),
            Node {
                id: id.clone(),
                kind,
                props,
                parent: Some(parent_id.to_string()),
                children: Vec::new(),
            },
        );
        if let Some(parent) = self.nodes.get_mut(parent_id) {
            let at = index.min(parent.children.len());
            parent.children.insert(at, id.clone());
        }
        Ok(id)
    }

    /// Relocate a node under a new parent at `index` (clamped, counted after detaching)
    pub fn move_to(
        &mut self,
        id: &str,
        new_parent_id: &str,
        index: usize,
    ) -> Result<(), MutationError> {
        let location = self.locate(id)?;
        let Some(old_parent_id) = location.parent else {
            return Err(MutationError::InvalidOperation(
                "cannot move the root container".to_string(),
            ));
        };
        let target = self
            .nodes
            .get(new_parent_id)
            .ok_or_else(|| MutationError::ParentNotFound(new_parent_id.to_string()))?;
        if !target.is_container() {
            return Err(MutationError::NotAContainer(new_parent_id.to_string()));
        }
        if self.is_ancestor_or_self(id, new_parent_id) {
            return Err(MutationError::CycleDetected);
        }

        if let Some(old_parent) = self.nodes.get_mut(&old_parent_id) {
            old_parent.children.remove(location.index);
        }
        if let Some(new_parent) = self.nodes.get_mut(new_parent_id) {
            let at = index.min(new_parent.children.len());
            new_parent.children.insert(at, id.to_string());
        }
        if let Some(node) = self.nodes.get_mut(id) {
            node.parent = Some(new_parent_id.to_string());
        }
        Ok(())
    }

    pub fn set_prop(
        &mut self,
        id: &str,
        key: &str,
        value: serde_json::Value,
    ) -> Result<(), MutationError> {
        let node = self
            .nodes
            .get_mut(id)
            .ok_or_else(|| MutationError::NodeNotFound(id.to_string()))?;
        node.props.insert(key.to_string(), value);
        Ok(())
    }

    /// Returns the previous value, if any
    pub fn remove_prop(
        &mut self,
        id: &str,
        key: &str,
    ) -> Result<Option<serde_json::Value>, MutationError> {
        let node = self
            .nodes
            .get_mut(id)
            .ok_or_else(|| MutationError::NodeNotFound(id.to_string()))?;
        Ok(node.props.remove(key))
    }

    /// True when `ancestor` is `id` itself or lies on the path from `id` to the root
    pub fn is_ancestor_or_self(&self, ancestor: &str, id: &str) -> bool {
        let mut current = Some(id);
        let mut steps = 0;
        while let Some(cur) = current {
            if cur == ancestor {
                return true;
            }
            steps += 1;
            if steps > self.nodes.len() {
                return false;
            }
            current = self.nodes.get(cur).and_then(|n| n.parent.as_deref());
        }
        false
    }

    pub fn check_invariants(&self) -> Result<(), String> {
        let root = self
            .nodes
            .get(&self.root)
            .ok_or_else(|| format!("root '{}' is not in the node set", self.root))?;
        if root.parent.is_some() {
            return Err("root must not have a parent".to_string());
        }
        if root.kind != ComponentKind::Canvas {
            return Err(format!("root must be a Canvas, found {}", root.kind));
        }

        for node in self.nodes.values() {
            if node.id != self.root && node.kind == ComponentKind::Canvas {
                return Err(format!("node '{}' is a second Canvas", node.id));
            }
            if !node.is_container() && !node.children.is_empty() {
                return Err(format!("{} node '{}' cannot hold children", node.kind, node.id));
            }
            if node.id != self.root {
                let parent_id = node
                    .parent
                    .as_ref()
                    .ok_or_else(|| format!("node '{}' has no parent", node.id))?;
                let parent = self.nodes.get(parent_id).ok_or_else(|| {
                    format!("node '{}' references missing parent '{}'", node.id, parent_id)
                })?;
                let listed = parent.children.iter().filter(|c| **c == node.id).count();
                if listed != 1 {
                    return Err(format!(
                        "parent '{}' lists node '{}' {} times",
                        parent_id, node.id, listed
                    ));
                }
            }
            for child in &node.children {
                let child_node = self
                    .nodes
                    .get(child)
                    .ok_or_else(|| format!("node '{}' lists missing child '{}'", node.id, child))?;
                if child_node.parent.as_deref() != Some(node.id.as_str()) {
                    return Err(format!(
                        "child '{}' does not point back to parent '{}'",
                        child, node.id
                    ));
                }
            }
        }

        // Reachability from the root rules out cycles among non-root nodes
        let mut seen = HashSet::with_capacity(self.nodes.len());
        let mut stack = vec![self.root.as_str()];
        while let Some(current) = stack.pop() {
            if !seen.insert(current) {
                return Err(format!("node '{}' is reachable twice", current));
            }
            if let Some(node) = self.nodes.get(current) {
                stack.extend(node.children.iter().map(String::as_str));
            }
        }
        if seen.len() != self.nodes.len() {
            return Err(format!(
                "{} node(s) are not reachable from the root (cycle or orphan)",
                self.nodes.len() - seen.len()
            ));
        }
        Ok(())
    }

    fn node(&self, id: &str) -> Result<&Node, MutationError> {
        self.nodes
            .get(id)
            .ok_or_else(|| MutationError::NodeNotFound(id.to_string()))
    }

    fn fresh_id(&mut self) -> NodeId {
        loop {
            let id = self.ids.new_id();
            if !self.nodes.contains_key(&id) {
                return id;
            }
        }
    }
}

impl PartialEq for Tree {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root && self.nodes == other.nodes
    }
}
