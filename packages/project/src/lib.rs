//! Project persistence boundary: record types, the `ProjectApi` contract, an
//! in-memory implementation and the orchestrator that moves page-store
//! snapshots into projects and versions without blocking the editor.

pub mod api;
pub mod boundary;
pub mod errors;
pub mod orchestrator;
pub mod records;

pub use api::{MemoryProjectApi, ProjectApi};
pub use boundary::Limits;
pub use errors::{ProjectError, ProjectResult};
pub use orchestrator::{Orchestrator, VersionPolicy, DEFAULT_VERSION_INTERVAL};
pub use records::{
    ExportKind, ExportRecord, ProjectRecord, ProjectUpdate, SubmissionRecord, SubmissionStatus,
    VersionRecord,
};
