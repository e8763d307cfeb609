//! # Document Handle
//!
//! A Document is the editing surface's view of one page: the live tree, a
//! version counter and a dirty flag.
//!
//! ## Lifecycle
//!
//! ```text
//! Load blob → Tree → Mutations → Serialize → Blob
//! ```
//!
//! Loading a blob that fails to decode leaves the current tree in place.

use crate::errors::EditorError;
use crate::mutations::{Mutation, MutationResult};
use crate::serializer::{self, TreeBlob};
use crate::tree::Tree;

#[derive(Debug)]
pub struct Document {
    /// Current version number (increments on each successful mutation or load)
    pub version: u64,

    tree: Tree,
    dirty: bool,
}

impl Document {
    /// Empty document containing only the root container
    pub fn new(label: &str) -> Self {
        Self {
            version: 0,
            tree: Tree::new(label),
            dirty: false,
        }
    }

    pub fn from_blob(blob: &TreeBlob) -> Result<Self, EditorError> {
        Ok(Self {
            version: 0,
            tree: serializer::deserialize(blob)?,
            dirty: false,
        })
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Apply a mutation. Failed mutations leave the document untouched.
    pub fn apply(&mut self, mutation: Mutation) -> Result<MutationResult, EditorError> {
        let created = mutation.apply(&mut self.tree)?;
        self.version += 1;
        self.dirty = true;

        tracing::debug!(target_node = %mutation.target(), version = self.version, "Applied mutation");
        Ok(MutationResult {
            version: self.version,
            created,
        })
    }

    pub fn serialize(&self) -> Result<TreeBlob, EditorError> {
        serializer::serialize(&self.tree)
    }

    /// Replace the tree with a decoded blob
    pub fn load(&mut self, blob: &TreeBlob) -> Result<(), EditorError> {
        let tree = serializer::deserialize(blob)?;
        self.tree = tree;
        self.version += 1;
        self.dirty = false;
        Ok(())
    }

    /// Check if document has unsaved changes
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}
