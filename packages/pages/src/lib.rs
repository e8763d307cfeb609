//! # Tessera Pages
//!
//! Multi-page state for the page builder: an ordered page collection, the
//! active page pointer, and the save/load traffic between stored page trees
//! and the editing surface.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::{Arc, Mutex};
//! use tessera_editor::Document;
//! use tessera_pages::{spawn_autosave, AutosaveConfig, PageStore};
//!
//! let store = Arc::new(Mutex::new(PageStore::new(Document::new("project"))));
//! let autosave = spawn_autosave(store.clone(), AutosaveConfig::default());
//!
//! let checkout = store.lock().unwrap().add_page(Some("Checkout"));
//! // ... edit through the surface ...
//! drop(autosave); // editor unmounted
//! ```

mod autosave;
mod collection;
mod errors;
mod store;
mod surface;

pub use autosave::{spawn_autosave, AutosaveConfig, AutosaveHandle, DEFAULT_AUTOSAVE_INTERVAL};
pub use collection::{Page, PageCollection, PageId};
pub use errors::{PageError, SurfaceError};
pub use store::{AutosaveOutcome, PageStore};
pub use surface::EditingSurface;
