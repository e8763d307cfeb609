//! # Tessera Editor
//!
//! Tree mutation engine for the Tessera page builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ tree: arena of nodes keyed by id            │
//! │  - locate / move / duplicate / remove       │
//! │  - invariant checks                         │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ mutations: serializable operations          │
//! │ document: live tree + version + dirty flag  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ serializer: versioned, byte-stable blobs    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tessera_editor::{ComponentKind, Document, Mutation, Props};
//!
//! let mut doc = Document::new("page-1");
//! let root = doc.tree().root_id().to_string();
//!
//! let result = doc.apply(Mutation::InsertNode {
//!     parent_id: root,
//!     index: 0,
//!     kind: ComponentKind::Button,
//!     props: Props::new(),
//! })?;
//!
//! let blob = doc.serialize()?;
//! ```

mod document;
mod errors;
mod id_generator;
mod kind;
mod mutations;
pub mod serializer;
mod tree;

pub use document::Document;
pub use errors::{EditorError, MutationError};
pub use id_generator::{tree_seed, IDGenerator};
pub use kind::ComponentKind;
pub use mutations::{Mutation, MutationResult};
pub use serializer::{deserialize, serialize, TreeBlob, SCHEMA_VERSION};
pub use tree::{Location, Node, NodeId, Props, Shape, Tree};
