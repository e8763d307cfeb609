//! # Tree Serialization
//!
//! Trees are stored as JSON envelopes:
//!
//! ```text
//! {"schema":1,"root":"<id>","seed":"<seed>","nodes":[{...}, ...]}
//! ```
//!
//! Nodes are sorted by id and props are ordered maps, so serializing an
//! unchanged tree twice yields byte-identical blobs. Autosave relies on this
//! for change detection.
//!
//! Blobs without a `schema` key are the legacy flat map written before the
//! envelope existed (`{"ROOT": {"type": ..., "nodes": [...]}, ...}`) and are
//! migrated on load. Newer schemas are refused with `UnsupportedSchema`.

use crate::errors::EditorError;
use crate::kind::ComponentKind;
use crate::tree::{Node, NodeId, Props, Tree};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

pub const SCHEMA_VERSION: u64 = 1;

const LEGACY_ROOT: &str = "ROOT";
const LEGACY_SEED: &str = "legacy";

/// Opaque encoded snapshot of a tree
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TreeBlob(String);

impl TreeBlob {
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TreeBlob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for TreeBlob {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    schema: u64,
    root: &'a str,
    seed: &'a str,
    nodes: Vec<&'a Node>,
}

#[derive(Deserialize)]
struct Envelope {
    root: NodeId,
    seed: String,
    nodes: Vec<Node>,
}

#[derive(Deserialize)]
struct LegacyNode {
    #[serde(rename = "type")]
    kind: LegacyKind,
    #[serde(default)]
    props: Props,
    #[serde(default)]
    parent: Option<NodeId>,
    #[serde(default)]
    nodes: Vec<NodeId>,
}

/// Legacy blobs wrote the kind either bare or as `{"resolvedName": ...}`
#[derive(Deserialize)]
#[serde(untagged)]
enum LegacyKind {
    Name(String),
    Resolved {
        #[serde(rename = "resolvedName")]
        resolved_name: String,
    },
}

impl LegacyKind {
    fn name(&self) -> &str {
        match self {
            LegacyKind::Name(name) => name,
            LegacyKind::Resolved { resolved_name } => resolved_name,
        }
    }
}

/// Encode a tree into its deterministic blob form
pub fn serialize(tree: &Tree) -> Result<TreeBlob, EditorError> {
    let mut nodes: Vec<&Node> = tree.nodes().collect();
    nodes.sort_by(|a, b| a.id.cmp(&b.id));

    let envelope = EnvelopeRef {
        schema: SCHEMA_VERSION,
        root: tree.root_id(),
        seed: tree.seed(),
        nodes,
    };
    Ok(TreeBlob(serde_json::to_string(&envelope)?))
}

/// Decode a blob, migrating legacy documents and checking every tree invariant
pub fn deserialize(blob: &TreeBlob) -> Result<Tree, EditorError> {
    let value: Value = serde_json::from_str(blob.as_str())
        .map_err(|e| EditorError::MalformedDocument(format!("invalid JSON: {}", e)))?;

    let Value::Object(map) = &value else {
        return Err(EditorError::MalformedDocument(
            "document must be a JSON object".to_string(),
        ));
    };

    let Some(schema) = map.get("schema") else {
        return migrate_legacy(value);
    };
    let schema = schema.as_u64().ok_or_else(|| {
        EditorError::MalformedDocument("schema must be a non-negative integer".to_string())
    })?;
    if schema > SCHEMA_VERSION {
        return Err(EditorError::UnsupportedSchema {
            found: schema,
            supported: SCHEMA_VERSION,
        });
    }
    if schema == 0 {
        return Err(EditorError::MalformedDocument(
            "schema 0 documents carry no envelope".to_string(),
        ));
    }

    let envelope: Envelope = serde_json::from_value(value)
        .map_err(|e| EditorError::MalformedDocument(e.to_string()))?;
    Tree::from_parts(envelope.seed, envelope.root, envelope.nodes)
        .map_err(EditorError::MalformedDocument)
}

fn migrate_legacy(value: Value) -> Result<Tree, EditorError> {
    let legacy: std::collections::BTreeMap<NodeId, LegacyNode> = serde_json::from_value(value)
        .map_err(|e| EditorError::MalformedDocument(format!("legacy document: {}", e)))?;
    if !legacy.contains_key(LEGACY_ROOT) {
        return Err(EditorError::MalformedDocument(
            "legacy document has no ROOT node".to_string(),
        ));
    }

    let mut nodes = Vec::with_capacity(legacy.len());
    for (id, node) in legacy {
        let kind = if id == LEGACY_ROOT {
            ComponentKind::Canvas
        } else {
            node.kind
                .name()
                .parse::<ComponentKind>()
                .map_err(EditorError::MalformedDocument)?
        };
        nodes.push(Node {
            id,
            kind,
            props: node.props,
            parent: node.parent,
            children: node.nodes,
        });
    }

    tracing::info!(nodes = nodes.len(), "Migrating legacy document to schema {}", SCHEMA_VERSION);
    Tree::from_parts(LEGACY_SEED.to_string(), LEGACY_ROOT.to_string(), nodes)
        .map_err(EditorError::MalformedDocument)
}
