pub mod init;
pub mod inspect;
pub mod validate;

pub use init::{init, InitArgs};
pub use inspect::{inspect, InspectArgs};
pub use validate::{validate, ValidateArgs};

use anyhow::{Context, Result};
use std::path::Path;
use tessera_editor::{serializer, Tree, TreeBlob};
use tessera_project::{boundary, Limits};
use tracing::debug;

/// Read and decode a tree blob file, refusing oversized documents
pub(crate) fn read_tree(path: &Path, limits: &Limits) -> Result<Tree> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read {}", path.display()))?;
    boundary::check_canvas_data(&content, limits)?;
    let tree = serializer::deserialize(&TreeBlob::new(content))
        .with_context(|| format!("Cannot decode {}", path.display()))?;
    debug!(path = %path.display(), nodes = tree.len(), "Decoded tree");
    Ok(tree)
}
