//! # Page Collection
//!
//! Ordered, non-empty list of pages plus the active page pointer.
//!
//! ## Invariants
//!
//! - at least one page
//! - `active_page_id` names a member
//! - exactly one page carries the home flag
//! - page ids are unique
//! - every stored tree decodes

use crate::errors::PageError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tessera_editor::{serializer, TreeBlob};

pub type PageId = String;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: PageId,
    pub name: String,

    /// Last stored tree; `None` until the page is first saved, meaning the
    /// empty tree with only the root container
    #[serde(default)]
    pub tree: Option<TreeBlob>,

    #[serde(default)]
    pub is_home: bool,
}

impl Page {
    fn new(id: PageId, name: String, is_home: bool) -> Self {
        Self {
            id,
            name,
            tree: None,
            is_home,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageCollection {
    pages: Vec<Page>,
    active_page_id: PageId,
}

impl PageCollection {
    /// Collection with a single home page
    pub fn new() -> Self {
        let id = next_page_id(&[]);
        Self {
            pages: vec![Page::new(id.clone(), "Page 1".to_string(), true)],
            active_page_id: id,
        }
    }

    /// Decode the project's `canvasData` text
    pub fn from_canvas_data(data: &str) -> Result<Self, PageError> {
        let collection: PageCollection =
            serde_json::from_str(data).map_err(|e| PageError::MalformedCanvas(e.to_string()))?;
        collection.check_invariants()?;
        Ok(collection)
    }

    /// Encode the whole collection as `canvasData` text
    pub fn to_canvas_data(&self) -> Result<String, PageError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn active_page_id(&self) -> &str {
        &self.active_page_id
    }

    pub fn active_page(&self) -> &Page {
        self.pages
            .iter()
            .find(|p| p.id == self.active_page_id)
            .unwrap_or(&self.pages[0])
    }

    pub fn page(&self, id: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.pages.iter().position(|p| p.id == id)
    }

    pub fn ids(&self) -> Vec<PageId> {
        self.pages.iter().map(|p| p.id.clone()).collect()
    }

    /// Append a page; the caller decides whether to activate it
    pub(crate) fn push(&mut self, name: Option<&str>) -> PageId {
        let id = next_page_id(&self.pages);
        let name = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Page {}", self.pages.len() + 1));
        self.pages.push(Page::new(id.clone(), name, false));
        id
    }

    pub(crate) fn set_active(&mut self, id: &str) -> Result<(), PageError> {
        if self.page(id).is_none() {
            return Err(PageError::PageNotFound(id.to_string()));
        }
        self.active_page_id = id.to_string();
        Ok(())
    }

    /// Remove a page. Returns false when it is the last page, the home page or unknown.
    pub(crate) fn remove(&mut self, id: &str) -> bool {
        if self.pages.len() <= 1 {
            return false;
        }
        let Some(index) = self.position(id) else {
            return false;
        };
        if self.pages[index].is_home {
            return false;
        }

        self.pages.remove(index);
        if self.active_page_id == id {
            self.active_page_id = self.pages[0].id.clone();
        }
        true
    }

    pub(crate) fn rename(&mut self, id: &str, name: &str) -> bool {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return false;
        }
        match self.pages.iter_mut().find(|p| p.id == id) {
            Some(page) => {
                page.name = trimmed.to_string();
                true
            }
            None => false,
        }
    }

    pub(crate) fn reorder(&mut self, from: usize, to: usize) -> Result<(), PageError> {
        let len = self.pages.len();
        if from >= len || to >= len {
            return Err(PageError::InvalidOperation(format!(
                "cannot move page {} to {} in a collection of {}",
                from, to, len
            )));
        }
        let page = self.pages.remove(from);
        self.pages.insert(to, page);
        Ok(())
    }

    pub(crate) fn set_tree(&mut self, id: &str, blob: TreeBlob) -> Result<(), PageError> {
        let page = self
            .pages
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| PageError::PageNotFound(id.to_string()))?;
        page.tree = Some(blob);
        Ok(())
    }

    pub(crate) fn set_home(&mut self, id: &str) -> Result<(), PageError> {
        if self.page(id).is_none() {
            return Err(PageError::PageNotFound(id.to_string()));
        }
        for page in &mut self.pages {
            page.is_home = page.id == id;
        }
        Ok(())
    }

    fn check_invariants(&self) -> Result<(), PageError> {
        if self.pages.is_empty() {
            return Err(PageError::MalformedCanvas("no pages".to_string()));
        }
        let mut seen = HashSet::new();
        for page in &self.pages {
            if !seen.insert(page.id.as_str()) {
                return Err(PageError::MalformedCanvas(format!("duplicate page id '{}'", page.id)));
            }
        }
        if !seen.contains(self.active_page_id.as_str()) {
            return Err(PageError::MalformedCanvas(format!(
                "active page '{}' is not in the collection",
                self.active_page_id
            )));
        }
        let homes = self.pages.iter().filter(|p| p.is_home).count();
        if homes != 1 {
            return Err(PageError::MalformedCanvas(format!(
                "expected exactly one home page, found {}",
                homes
            )));
        }
        for page in &self.pages {
            if let Some(blob) = &page.tree {
                serializer::deserialize(blob).map_err(|e| {
                    PageError::MalformedCanvas(format!("page '{}': {}", page.id, e))
                })?;
            }
        }
        Ok(())
    }
}

impl Default for PageCollection {
    fn default() -> Self {
        Self::new()
    }
}

/// Time-derived id, bumped past any id already in use
fn next_page_id(existing: &[Page]) -> PageId {
    let mut stamp = chrono::Utc::now().timestamp_millis();
    loop {
        let id = format!("page-{}", stamp);
        if existing.iter().all(|p| p.id != id) {
            return id;
        }
        stamp += 1;
    }
}
