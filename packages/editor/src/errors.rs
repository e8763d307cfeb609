//! Error types for the editor

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Parent not found: {0}")]
    ParentNotFound(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Would create cycle")]
    CycleDetected,

    #[error("Node cannot hold children: {0}")]
    NotAContainer(String),
}

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Mutation error: {0}")]
    Mutation(#[from] MutationError),

    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    #[error("Unsupported document schema {found} (newest supported is {supported})")]
    UnsupportedSchema { found: u64, supported: u64 },

    #[error("Encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

impl EditorError {
    /// True for errors raised while decoding a blob
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            EditorError::MalformedDocument(_) | EditorError::UnsupportedSchema { .. }
        )
    }
}
