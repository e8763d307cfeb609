//! Contract between the page store and the editing surface that owns the
//! live tree. The store only ever reads a snapshot or hands one over to load.

use crate::errors::SurfaceError;
use tessera_editor::{Document, TreeBlob};

pub trait EditingSurface {
    /// Snapshot of the tree currently being edited
    fn get_serialized_tree(&self) -> Result<TreeBlob, SurfaceError>;

    /// Replace the live tree. On error the previous tree must stay in place.
    fn load_serialized_tree(&mut self, blob: &TreeBlob) -> Result<(), SurfaceError>;
}

impl EditingSurface for Document {
    fn get_serialized_tree(&self) -> Result<TreeBlob, SurfaceError> {
        Ok(self.serialize()?)
    }

    fn load_serialized_tree(&mut self, blob: &TreeBlob) -> Result<(), SurfaceError> {
        Ok(self.load(blob)?)
    }
}
