//! # Project API
//!
//! The persistence boundary the editor talks to. Implementations validate
//! every input before storing it.

use crate::boundary::{self, Limits};
use crate::errors::{ProjectError, ProjectResult};
use crate::records::{
    ExportKind, ExportRecord, ProjectRecord, ProjectUpdate, SubmissionRecord, SubmissionStatus,
    VersionRecord,
};
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

pub trait ProjectApi: Send + Sync {
    fn create_project(&self, name: &str, canvas_data: &str) -> ProjectResult<ProjectRecord>;

    fn get_project(&self, id: u64) -> ProjectResult<ProjectRecord>;

    fn update_project(&self, id: u64, update: ProjectUpdate) -> ProjectResult<ProjectRecord>;

    /// Remove a project together with its versions, exports and submissions
    fn delete_project(&self, id: u64) -> ProjectResult<()>;

    /// Snapshot canvas data under the next version number
    fn create_version(
        &self,
        project_id: u64,
        canvas_data: &str,
        change_description: &str,
    ) -> ProjectResult<VersionRecord>;

    /// Versions of a project, oldest first
    fn list_versions(&self, project_id: u64) -> ProjectResult<Vec<VersionRecord>>;

    fn record_export(&self, project_id: u64, kind: ExportKind) -> ProjectResult<ExportRecord>;

    fn record_submission(
        &self,
        project_id: u64,
        app_name: &str,
        notes: &str,
    ) -> ProjectResult<SubmissionRecord>;
}

#[derive(Debug, Default)]
struct MemoryState {
    next_id: u64,
    projects: BTreeMap<u64, ProjectRecord>,
    versions: BTreeMap<u64, Vec<VersionRecord>>,
    exports: Vec<ExportRecord>,
    submissions: Vec<SubmissionRecord>,
}

/// Process-local `ProjectApi`, used by tests and offline tooling
#[derive(Debug)]
pub struct MemoryProjectApi {
    state: Mutex<MemoryState>,
    limits: Limits,
    available: AtomicBool,
}

impl MemoryProjectApi {
    pub fn new() -> Self {
        Self::with_limits(Limits::default())
    }

    pub fn with_limits(limits: Limits) -> Self {
        Self {
            state: Mutex::new(MemoryState::default()),
            limits,
            available: AtomicBool::new(true),
        }
    }

    /// Simulate the backing store going away or coming back
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    pub fn exports(&self) -> ProjectResult<Vec<ExportRecord>> {
        Ok(self.state()?.exports.clone())
    }

    pub fn submissions(&self) -> ProjectResult<Vec<SubmissionRecord>> {
        Ok(self.state()?.submissions.clone())
    }

    fn state(&self) -> ProjectResult<MutexGuard<'_, MemoryState>> {
        if !self.available.load(Ordering::SeqCst) {
            return Err(ProjectError::PersistenceUnavailable(
                "store is offline".to_string(),
            ));
        }
        self.state
            .lock()
            .map_err(|_| ProjectError::PersistenceUnavailable("store lock poisoned".to_string()))
    }
}

impl Default for MemoryProjectApi {
    fn default() -> Self {
        Self::new()
    }
}

fn require(state: &MemoryState, id: u64) -> ProjectResult<()> {
    if state.projects.contains_key(&id) {
        Ok(())
    } else {
        Err(ProjectError::NotFound(id))
    }
}

impl ProjectApi for MemoryProjectApi {
    fn create_project(&self, name: &str, canvas_data: &str) -> ProjectResult<ProjectRecord> {
        boundary::check_name(name)?;
        boundary::check_canvas_data(canvas_data, &self.limits)?;

        let mut state = self.state()?;
        state.next_id += 1;
        let now = Utc::now();
        let record = ProjectRecord {
            id: state.next_id,
            name: name.trim().to_string(),
            canvas_data: canvas_data.to_string(),
            app_info: None,
            thumbnail: None,
            created_at: now,
            updated_at: now,
        };
        state.projects.insert(record.id, record.clone());
        debug!(project_id = record.id, "Created project");
        Ok(record)
    }

    fn get_project(&self, id: u64) -> ProjectResult<ProjectRecord> {
        self.state()?
            .projects
            .get(&id)
            .cloned()
            .ok_or(ProjectError::NotFound(id))
    }

    fn update_project(&self, id: u64, update: ProjectUpdate) -> ProjectResult<ProjectRecord> {
        if let Some(name) = &update.name {
            boundary::check_name(name)?;
        }
        if let Some(data) = &update.canvas_data {
            boundary::check_canvas_data(data, &self.limits)?;
        }

        let mut state = self.state()?;
        let record = state.projects.get_mut(&id).ok_or(ProjectError::NotFound(id))?;
        if let Some(name) = update.name {
            record.name = name.trim().to_string();
        }
        if let Some(data) = update.canvas_data {
            record.canvas_data = data;
        }
        if let Some(info) = update.app_info {
            record.app_info = Some(info);
        }
        if let Some(thumbnail) = update.thumbnail {
            record.thumbnail = Some(thumbnail);
        }
        record.updated_at = Utc::now();
        Ok(record.clone())
    }

    fn delete_project(&self, id: u64) -> ProjectResult<()> {
        let mut state = self.state()?;
        if state.projects.remove(&id).is_none() {
            return Err(ProjectError::NotFound(id));
        }
        state.versions.remove(&id);
        state.exports.retain(|e| e.project_id != id);
        state.submissions.retain(|s| s.project_id != id);
        debug!(project_id = id, "Deleted project");
        Ok(())
    }

    fn create_version(
        &self,
        project_id: u64,
        canvas_data: &str,
        change_description: &str,
    ) -> ProjectResult<VersionRecord> {
        boundary::check_canvas_data(canvas_data, &self.limits)?;
        boundary::check_description(change_description)?;

        let mut state = self.state()?;
        require(&state, project_id)?;
        let versions = state.versions.entry(project_id).or_default();
        let record = VersionRecord {
            project_id,
            version: versions.len() as u32 + 1,
            canvas_data: canvas_data.to_string(),
            change_description: change_description.to_string(),
            created_at: Utc::now(),
        };
        versions.push(record.clone());
        debug!(project_id, version = record.version, "Created version");
        Ok(record)
    }

    fn list_versions(&self, project_id: u64) -> ProjectResult<Vec<VersionRecord>> {
        let state = self.state()?;
        require(&state, project_id)?;
        Ok(state.versions.get(&project_id).cloned().unwrap_or_default())
    }

    fn record_export(&self, project_id: u64, kind: ExportKind) -> ProjectResult<ExportRecord> {
        let mut state = self.state()?;
        require(&state, project_id)?;
        let record = ExportRecord {
            project_id,
            kind,
            created_at: Utc::now(),
        };
        state.exports.push(record.clone());
        Ok(record)
    }

    fn record_submission(
        &self,
        project_id: u64,
        app_name: &str,
        notes: &str,
    ) -> ProjectResult<SubmissionRecord> {
        boundary::check_app_name(app_name)?;
        boundary::check_notes(notes)?;

        let mut state = self.state()?;
        require(&state, project_id)?;
        let record = SubmissionRecord {
            project_id,
            app_name: app_name.to_string(),
            status: SubmissionStatus::Submitted,
            submitted_at: Utc::now(),
            notes: notes.to_string(),
        };
        state.submissions.push(record.clone());
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANVAS: &str = r#"{"pages":[]}"#;

    #[test]
    fn test_create_and_get() {
        let api = MemoryProjectApi::new();
        let created = api.create_project("  Budget Book ", CANVAS).unwrap();
        assert_eq!(created.name, "Budget Book");
        assert_eq!(api.get_project(created.id).unwrap(), created);
        assert_eq!(api.get_project(99), Err(ProjectError::NotFound(99)));
    }

    #[test]
    fn test_update_rejects_bad_input_without_changes() {
        let api = MemoryProjectApi::new();
        let created = api.create_project("App", CANVAS).unwrap();
        let update = ProjectUpdate {
            name: Some("Renamed".to_string()),
            canvas_data: Some("{bad".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            api.update_project(created.id, update),
            Err(ProjectError::InvalidInput { field: "canvasData", .. })
        ));
        assert_eq!(api.get_project(created.id).unwrap().name, "App");
    }

    #[test]
    fn test_versions_number_from_one() {
        let api = MemoryProjectApi::new();
        let id = api.create_project("App", CANVAS).unwrap().id;
        api.create_version(id, CANVAS, "first").unwrap();
        let second = api.create_version(id, CANVAS, "second").unwrap();
        assert_eq!(second.version, 2);

        let versions = api.list_versions(id).unwrap();
        let numbers: Vec<u32> = versions.iter().map(|v| v.version).collect();
        assert_eq!(numbers, vec![1, 2]);
    }

    #[test]
    fn test_delete_cascades() {
        let api = MemoryProjectApi::new();
        let id = api.create_project("App", CANVAS).unwrap().id;
        api.create_version(id, CANVAS, "v").unwrap();
        api.record_export(id, ExportKind::Html).unwrap();
        api.record_submission(id, "my-app", "").unwrap();

        api.delete_project(id).unwrap();
        assert_eq!(api.list_versions(id), Err(ProjectError::NotFound(id)));
        assert!(api.exports().unwrap().is_empty());
        assert!(api.submissions().unwrap().is_empty());
        assert_eq!(api.delete_project(id), Err(ProjectError::NotFound(id)));
    }

    #[test]
    fn test_submission_checks_app_name() {
        let api = MemoryProjectApi::new();
        let id = api.create_project("App", CANVAS).unwrap().id;
        assert!(api.record_submission(id, "My-App", "").is_err());
        let record = api.record_submission(id, "my-app", "first release").unwrap();
        assert_eq!(record.status, SubmissionStatus::Submitted);
    }

    #[test]
    fn test_offline_store_reports_unavailable() {
        let api = MemoryProjectApi::new();
        api.set_available(false);
        assert!(matches!(
            api.create_project("App", CANVAS),
            Err(ProjectError::PersistenceUnavailable(_))
        ));
    }
}
