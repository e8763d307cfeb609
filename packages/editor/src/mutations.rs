//! # Tree Mutations
//!
//! Serializable, intent-preserving operations on a page tree.
//!
//! ## Mutation Semantics
//!
//! ### MoveUp / MoveDown
//! - Swap with the immediate previous / next sibling
//! - No-op at the boundary and on the root
//!
//! ### MoveNode
//! - Atomic relocation of a node to a new container at index
//! - Fails if the target is inside the moved subtree
//!
//! ### Duplicate
//! - Deep copy with fresh ids, inserted right after the original
//!
//! ### RemoveNode
//! - Removes node and all descendants
//! - Root and reserved containers cannot be removed, directly or as
//!   part of an ancestor's subtree

use crate::errors::MutationError;
use crate::kind::ComponentKind;
use crate::tree::{NodeId, Props, Tree};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Mutation {
    /// Place a new component under a container
    InsertNode {
        parent_id: NodeId,
        index: usize,
        kind: ComponentKind,
        #[serde(default)]
        props: Props,
    },

    /// Set one configuration value
    SetProp {
        node_id: NodeId,
        key: String,
        value: serde_json::Value,
    },

    RemoveProp {
        node_id: NodeId,
        key: String,
    },

    MoveUp {
        node_id: NodeId,
    },

    MoveDown {
        node_id: NodeId,
    },

    /// Move to a new parent at index
    MoveNode {
        node_id: NodeId,
        new_parent_id: NodeId,
        index: usize,
    },

    Duplicate {
        node_id: NodeId,
    },

    RemoveNode {
        node_id: NodeId,
    },
}

impl Mutation {
    /// Apply mutation to the tree. Returns the id of a created node, if any.
    pub fn apply(&self, tree: &mut Tree) -> Result<Option<NodeId>, MutationError> {
        self.validate(tree)?;

        match self {
            Mutation::InsertNode { parent_id, index, kind, props } => {
                tree.insert(parent_id, *index, *kind, props.clone()).map(Some)
            }
            Mutation::SetProp { node_id, key, value } => {
                tree.set_prop(node_id, key, value.clone()).map(|_| None)
            }
            Mutation::RemoveProp { node_id, key } => tree.remove_prop(node_id, key).map(|_| None),
            Mutation::MoveUp { node_id } => tree.move_up(node_id).map(|_| None),
            Mutation::MoveDown { node_id } => tree.move_down(node_id).map(|_| None),
            Mutation::MoveNode { node_id, new_parent_id, index } => {
                tree.move_to(node_id, new_parent_id, *index).map(|_| None)
            }
            Mutation::Duplicate { node_id } => tree.duplicate(node_id).map(Some),
            Mutation::RemoveNode { node_id } => tree.remove(node_id).map(|_| None),
        }
    }

    /// Validate without applying
    pub fn validate(&self, tree: &Tree) -> Result<(), MutationError> {
        match self {
            Mutation::InsertNode { parent_id, kind, .. } => {
                let parent = tree
                    .get(parent_id)
                    .ok_or_else(|| MutationError::ParentNotFound(parent_id.clone()))?;
                if *kind == ComponentKind::Canvas {
                    return Err(MutationError::InvalidOperation(
                        "a tree has exactly one Canvas".to_string(),
                    ));
                }
                if !parent.is_container() {
                    return Err(MutationError::NotAContainer(parent_id.clone()));
                }
                Ok(())
            }

            Mutation::SetProp { node_id, .. }
            | Mutation::RemoveProp { node_id, .. }
            | Mutation::MoveUp { node_id }
            | Mutation::MoveDown { node_id } => Self::require(tree, node_id),

            Mutation::MoveNode { node_id, new_parent_id, .. } => {
                Self::require_non_root(tree, node_id, "move")?;
                let parent = tree
                    .get(new_parent_id)
                    .ok_or_else(|| MutationError::ParentNotFound(new_parent_id.clone()))?;
                if !parent.is_container() {
                    return Err(MutationError::NotAContainer(new_parent_id.clone()));
                }
                if tree.is_ancestor_or_self(node_id, new_parent_id) {
                    return Err(MutationError::CycleDetected);
                }
                Ok(())
            }

            Mutation::Duplicate { node_id } => Self::require_non_root(tree, node_id, "duplicate"),

            Mutation::RemoveNode { node_id } => {
                Self::require_non_root(tree, node_id, "remove")?;
                if let Some(kind) = tree.reserved_in_subtree(node_id)? {
                    return Err(MutationError::InvalidOperation(format!(
                        "{} nodes cannot be removed",
                        kind
                    )));
                }
                Ok(())
            }
        }
    }

    /// Id of the node the mutation targets
    pub fn target(&self) -> &str {
        match self {
            Mutation::InsertNode { parent_id, .. } => parent_id,
            Mutation::SetProp { node_id, .. }
            | Mutation::RemoveProp { node_id, .. }
            | Mutation::MoveUp { node_id }
            | Mutation::MoveDown { node_id }
            | Mutation::MoveNode { node_id, .. }
            | Mutation::Duplicate { node_id }
            | Mutation::RemoveNode { node_id } => node_id,
        }
    }

    fn require(tree: &Tree, node_id: &str) -> Result<(), MutationError> {
        if tree.contains(node_id) {
            Ok(())
        } else {
            Err(MutationError::NodeNotFound(node_id.to_string()))
        }
    }

    fn require_non_root(tree: &Tree, node_id: &str, action: &str) -> Result<(), MutationError> {
        Self::require(tree, node_id)?;
        if tree.is_root(node_id) {
            return Err(MutationError::InvalidOperation(format!(
                "cannot {} the root container",
                action
            )));
        }
        Ok(())
    }
}

/// Result of applying a mutation
#[derive(Debug, Clone, PartialEq)]
pub struct MutationResult {
    /// New version number
    pub version: u64,

    /// Node created by an insert or duplicate
    pub created: Option<NodeId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutation_serialization() {
        let mutation = Mutation::MoveNode {
            node_id: "a-1".to_string(),
            new_parent_id: "a-0".to_string(),
            index: 2,
        };

        let json = serde_json::to_string(&mutation).unwrap();
        assert!(json.contains("\"op\":\"moveNode\""));
        let deserialized: Mutation = serde_json::from_str(&json).unwrap();
        assert_eq!(mutation, deserialized);
    }

    #[test]
    fn test_validation_rejects_empty_ids() {
        let tree = Tree::new("test");
        let mutation = Mutation::SetProp {
            node_id: "".to_string(),
            key: "label".to_string(),
            value: serde_json::json!("x"),
        };
        assert_eq!(
            mutation.validate(&tree),
            Err(MutationError::NodeNotFound(String::new()))
        );
    }

    #[test]
    fn test_insert_then_duplicate_reports_created_ids() {
        let mut tree = Tree::new("test");
        let root = tree.root_id().to_string();
        let inserted = Mutation::InsertNode {
            parent_id: root,
            index: 0,
            kind: ComponentKind::Button,
            props: Props::new(),
        }
        .apply(&mut tree)
        .unwrap()
        .unwrap();

        let copy = Mutation::Duplicate { node_id: inserted.clone() }
            .apply(&mut tree)
            .unwrap()
            .unwrap();
        assert_ne!(copy, inserted);
        assert_eq!(tree.root().children, vec![inserted, copy]);
    }
}
