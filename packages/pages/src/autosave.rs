//! Periodic autosave of the active page.
//!
//! The task lives as long as its [`AutosaveHandle`]; dropping the handle
//! (editor unmount) stops it. A tick that finds the store locked, because a
//! page switch or another user action is in flight, is discarded rather
//! than queued.

use crate::store::{AutosaveOutcome, PageStore};
use crate::surface::EditingSurface;
use std::sync::{Arc, Mutex, TryLockError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

pub const DEFAULT_AUTOSAVE_INTERVAL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutosaveConfig {
    pub interval: Duration,
}

impl Default for AutosaveConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_AUTOSAVE_INTERVAL,
        }
    }
}

pub struct AutosaveHandle {
    task: JoinHandle<()>,
}

impl AutosaveHandle {
    pub fn stop(self) {
        self.task.abort();
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for AutosaveHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Start autosaving `store` on the current tokio runtime
pub fn spawn_autosave<S>(store: Arc<Mutex<PageStore<S>>>, config: AutosaveConfig) -> AutosaveHandle
where
    S: EditingSurface + Send + 'static,
{
    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(config.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // The first tick completes immediately
        ticker.tick().await;

        loop {
            ticker.tick().await;
            autosave_tick(&store);
        }
    });

    AutosaveHandle { task }
}

fn autosave_tick<S: EditingSurface>(store: &Mutex<PageStore<S>>) -> Option<AutosaveOutcome> {
    match store.try_lock() {
        Ok(mut guard) => Some(guard.autosave()),
        Err(TryLockError::WouldBlock) => {
            debug!("Page store busy; discarding autosave tick");
            None
        }
        Err(TryLockError::Poisoned(poisoned)) => {
            warn!("Page store lock poisoned; autosaving recovered state");
            Some(poisoned.into_inner().autosave())
        }
    }
}
