//! # Page Store
//!
//! Owns the page collection and drives the editing surface when the active
//! page changes. The store never edits a tree itself: it asks the surface
//! for a snapshot, or hands a stored snapshot over to load.
//!
//! ## Switching
//!
//! ```text
//! snapshot outgoing page → activate target → load target into surface
//! ```
//!
//! Snapshot and load failures are logged and never abort the switch. Each
//! operation takes `&mut self`, so when the store sits behind a mutex a
//! switch runs to completion before an autosave tick can observe it.
//!
//! When the surface rejects a page's tree, the surface still shows the
//! previous page. The store marks the active page as detached and writes
//! nothing back to it until a later load succeeds.

use crate::collection::{Page, PageCollection, PageId};
use crate::errors::PageError;
use crate::surface::EditingSurface;
use tessera_editor::{serializer, Tree, TreeBlob};
use tracing::{debug, info, warn};

/// What an autosave pass did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutosaveOutcome {
    Saved,
    Unchanged,
    Failed,
}

pub struct PageStore<S> {
    pages: PageCollection,
    surface: S,

    /// Whether the surface currently holds the active page's tree
    loaded: bool,
}

impl<S: EditingSurface> PageStore<S> {
    /// Fresh store with one home page, loaded into the surface
    pub fn new(surface: S) -> Self {
        Self::with_pages(PageCollection::new(), surface)
    }

    /// Restore a saved collection and load its active page
    pub fn with_pages(pages: PageCollection, surface: S) -> Self {
        let mut store = Self {
            pages,
            surface,
            loaded: false,
        };
        store.load_active();
        info!(pages = store.pages.len(), active = %store.pages.active_page_id(), "Page store mounted");
        store
    }

    pub fn pages(&self) -> &[Page] {
        self.pages.pages()
    }

    pub fn collection(&self) -> &PageCollection {
        &self.pages
    }

    pub fn page(&self, id: &str) -> Option<&Page> {
        self.pages.page(id)
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn active_page_id(&self) -> &str {
        self.pages.active_page_id()
    }

    pub fn active_page(&self) -> &Page {
        self.pages.active_page()
    }

    /// False after the surface rejected the active page's tree
    pub fn is_active_loaded(&self) -> bool {
        self.loaded
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Tear the store down, handing the surface back
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Append a page with an empty tree and make it active
    pub fn add_page(&mut self, name: Option<&str>) -> PageId {
        self.persist_active();
        let id = self.pages.push(name);
        if let Err(e) = self.pages.set_active(&id) {
            warn!(error = %e, "New page vanished before activation");
        }
        self.load_active();
        debug!(page_id = %id, "Added page");
        id
    }

    pub fn switch_page(&mut self, target: &str) -> Result<(), PageError> {
        if self.pages.page(target).is_none() {
            return Err(PageError::PageNotFound(target.to_string()));
        }
        if self.pages.active_page_id() == target {
            return Ok(());
        }

        self.persist_active();
        self.pages.set_active(target)?;
        self.load_active();
        debug!(page_id = %target, "Switched page");
        Ok(())
    }

    /// Remove a page. Returns false, changing nothing, for the last page,
    /// the home page or an unknown id.
    pub fn delete_page(&mut self, id: &str) -> bool {
        let was_active = self.pages.active_page_id() == id;
        if !self.pages.remove(id) {
            debug!(page_id = %id, "Ignored page deletion");
            return false;
        }
        if was_active {
            self.load_active();
        }
        debug!(page_id = %id, "Deleted page");
        true
    }

    /// Rename a page. Blank names are ignored.
    pub fn rename_page(&mut self, id: &str, name: &str) -> bool {
        self.pages.rename(id, name)
    }

    pub fn reorder_pages(&mut self, from: usize, to: usize) -> Result<(), PageError> {
        self.pages.reorder(from, to)
    }

    /// Overwrite the stored tree for a page
    pub fn update_page_state(&mut self, id: &str, blob: TreeBlob) -> Result<(), PageError> {
        self.pages.set_tree(id, blob)
    }

    pub fn set_home(&mut self, id: &str) -> Result<(), PageError> {
        self.pages.set_home(id)
    }

    /// Store the surface's current tree against the active page if it changed
    pub fn autosave(&mut self) -> AutosaveOutcome {
        if !self.loaded {
            warn!(page_id = %self.pages.active_page_id(), "Autosave skipped; active page is not loaded in the editing surface");
            return AutosaveOutcome::Failed;
        }

        let blob = match self.surface.get_serialized_tree() {
            Ok(blob) => blob,
            Err(e) => {
                warn!(error = %e, page_id = %self.pages.active_page_id(), "Autosave could not read the editing surface");
                return AutosaveOutcome::Failed;
            }
        };

        if self.pages.active_page().tree.as_ref() == Some(&blob) {
            return AutosaveOutcome::Unchanged;
        }

        let active = self.pages.active_page_id().to_string();
        match self.update_page_state(&active, blob) {
            Ok(()) => {
                debug!(page_id = %active, "Autosaved page");
                AutosaveOutcome::Saved
            }
            Err(e) => {
                warn!(error = %e, "Autosave could not store the page");
                AutosaveOutcome::Failed
            }
        }
    }

    /// Flush the live tree and encode every page as the project's `canvasData`
    pub fn canvas_data(&mut self) -> Result<String, PageError> {
        self.autosave();
        self.pages.to_canvas_data()
    }

    fn persist_active(&mut self) {
        let active = self.pages.active_page_id().to_string();
        if !self.loaded {
            debug!(page_id = %active, "Outgoing page was never loaded; keeping its stored tree");
            return;
        }
        match self.surface.get_serialized_tree() {
            Ok(blob) => {
                if let Err(e) = self.pages.set_tree(&active, blob) {
                    warn!(error = %e, page_id = %active, "Could not store outgoing page");
                }
            }
            Err(e) => {
                warn!(error = %e, page_id = %active, "Could not snapshot outgoing page; keeping last saved tree");
            }
        }
    }

    fn load_active(&mut self) {
        let page = self.pages.active_page();
        let id = page.id.clone();
        self.loaded = false;
        let blob = match &page.tree {
            Some(blob) => blob.clone(),
            None => match serializer::serialize(&Tree::new(&id)) {
                Ok(blob) => blob,
                Err(e) => {
                    warn!(error = %e, page_id = %id, "Could not build empty tree");
                    return;
                }
            },
        };

        match self.surface.load_serialized_tree(&blob) {
            Ok(()) => self.loaded = true,
            Err(e) => {
                warn!(error = %e, page_id = %id, "Editing surface rejected page; keeping previous tree")
            }
        }
    }
}
