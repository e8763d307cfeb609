//! # Orchestrator
//!
//! Bridges the page store and the project API. Writes are handed to the
//! blocking pool and never awaited by the editor; failures are logged and
//! dropped. The next save carries the full canvas again, so nothing is
//! retried.

use crate::api::ProjectApi;
use crate::records::ProjectUpdate;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use tessera_pages::{EditingSurface, PageError, PageStore};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

pub const DEFAULT_VERSION_INTERVAL: Duration = Duration::from_secs(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionPolicy {
    /// Minimum time between automatic versions
    pub interval: Duration,
}

impl Default for VersionPolicy {
    fn default() -> Self {
        Self {
            interval: DEFAULT_VERSION_INTERVAL,
        }
    }
}

pub struct Orchestrator {
    api: Arc<dyn ProjectApi>,
    project_id: u64,
    policy: VersionPolicy,
    last_version_at: Option<DateTime<Utc>>,
    last_versioned: Option<String>,
}

impl Orchestrator {
    pub fn new(api: Arc<dyn ProjectApi>, project_id: u64, policy: VersionPolicy) -> Self {
        Self {
            api,
            project_id,
            policy,
            last_version_at: None,
            last_versioned: None,
        }
    }

    pub fn project_id(&self) -> u64 {
        self.project_id
    }

    /// Write canvas data to the project record in the background.
    /// The handle may be dropped; the write still runs.
    pub fn persist(&self, canvas_data: String) -> JoinHandle<()> {
        let api = Arc::clone(&self.api);
        let project_id = self.project_id;
        tokio::task::spawn_blocking(move || {
            let update = ProjectUpdate {
                canvas_data: Some(canvas_data),
                ..Default::default()
            };
            match api.update_project(project_id, update) {
                Ok(_) => debug!(project_id, "Persisted canvas"),
                Err(e) => warn!(project_id, error = %e, "Canvas persistence failed"),
            }
        })
    }

    /// Flush the store's live page and persist every page
    pub fn persist_store<S: EditingSurface>(
        &self,
        store: &mut PageStore<S>,
    ) -> Result<JoinHandle<()>, PageError> {
        let data = store.canvas_data()?;
        Ok(self.persist(data))
    }

    /// Whether a version is due at `now` for this canvas
    pub fn version_due(&self, canvas_data: &str, now: DateTime<Utc>) -> bool {
        if self.last_versioned.as_deref() == Some(canvas_data) {
            return false;
        }
        match self.last_version_at {
            None => true,
            Some(last) => (now - last)
                .to_std()
                .map(|elapsed| elapsed >= self.policy.interval)
                .unwrap_or(false),
        }
    }

    /// Create a version in the background when the interval elapsed and the
    /// canvas changed since the last one. Returns `None` when nothing is due.
    pub fn maybe_version(&mut self, canvas_data: &str, now: DateTime<Utc>) -> Option<JoinHandle<()>> {
        if !self.version_due(canvas_data, now) {
            return None;
        }
        self.last_version_at = Some(now);
        self.last_versioned = Some(canvas_data.to_string());

        let api = Arc::clone(&self.api);
        let project_id = self.project_id;
        let data = canvas_data.to_string();
        let description = format!("Autosave {}", now.format("%Y-%m-%d %H:%M"));
        Some(tokio::task::spawn_blocking(move || {
            match api.create_version(project_id, &data, &description) {
                Ok(record) => debug!(project_id, version = record.version, "Created version"),
                Err(e) => warn!(project_id, error = %e, "Version creation failed"),
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MemoryProjectApi;
    use chrono::TimeZone;

    fn setup() -> (Arc<MemoryProjectApi>, Orchestrator) {
        let api = Arc::new(MemoryProjectApi::new());
        let id = api.create_project("App", "{}").unwrap().id;
        let orchestrator = Orchestrator::new(api.clone(), id, VersionPolicy::default());
        (api, orchestrator)
    }

    #[test]
    fn test_version_due_rules() {
        let (_, mut orchestrator) = setup();
        let t0 = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        assert!(orchestrator.version_due("{\"a\":1}", t0));

        orchestrator.last_version_at = Some(t0);
        orchestrator.last_versioned = Some("{\"a\":1}".to_string());

        let later = t0 + chrono::Duration::seconds(301);
        assert!(!orchestrator.version_due("{\"a\":1}", later));
        assert!(!orchestrator.version_due("{\"a\":2}", t0 + chrono::Duration::seconds(60)));
        assert!(orchestrator.version_due("{\"a\":2}", later));
    }

    #[tokio::test]
    async fn test_persist_updates_record() {
        let (api, orchestrator) = setup();
        orchestrator.persist("{\"pages\":[]}".to_string()).await.unwrap();
        let record = api.get_project(orchestrator.project_id()).unwrap();
        assert_eq!(record.canvas_data, "{\"pages\":[]}");
    }

    #[tokio::test]
    async fn test_persist_failure_is_swallowed() {
        let (api, orchestrator) = setup();
        api.set_available(false);
        orchestrator.persist("{}".to_string()).await.unwrap();
        api.set_available(true);
        assert_eq!(api.get_project(orchestrator.project_id()).unwrap().canvas_data, "{}");
    }
}
