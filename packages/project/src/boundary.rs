//! Input checks applied before anything reaches storage

use crate::errors::{ProjectError, ProjectResult};
use regex::Regex;
use std::sync::OnceLock;

pub const MAX_NAME_CHARS: usize = 100;
pub const MAX_DESCRIPTION_CHARS: usize = 500;
pub const MAX_NOTES_CHARS: usize = 2000;
pub const MAX_APP_NAME_CHARS: usize = 50;
pub const DEFAULT_MAX_CANVAS_BYTES: usize = 5 * 1024 * 1024;

/// Size limits enforced at the persistence boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_canvas_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_canvas_bytes: DEFAULT_MAX_CANVAS_BYTES,
        }
    }
}

fn app_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-z][a-z0-9-]*$").expect("app name pattern is valid"))
}

fn max_chars(field: &'static str, value: &str, max: usize) -> ProjectResult<()> {
    let count = value.chars().count();
    if count > max {
        return Err(ProjectError::invalid(
            field,
            format!("{} characters exceeds the limit of {}", count, max),
        ));
    }
    Ok(())
}

pub fn check_name(name: &str) -> ProjectResult<()> {
    if name.trim().is_empty() {
        return Err(ProjectError::invalid("name", "must not be blank"));
    }
    max_chars("name", name, MAX_NAME_CHARS)
}

pub fn check_description(description: &str) -> ProjectResult<()> {
    max_chars("description", description, MAX_DESCRIPTION_CHARS)
}

pub fn check_notes(notes: &str) -> ProjectResult<()> {
    max_chars("notes", notes, MAX_NOTES_CHARS)
}

pub fn check_app_name(app_name: &str) -> ProjectResult<()> {
    if app_name.is_empty() {
        return Err(ProjectError::invalid("appName", "must not be empty"));
    }
    max_chars("appName", app_name, MAX_APP_NAME_CHARS)?;
    if !app_name_pattern().is_match(app_name) {
        return Err(ProjectError::invalid(
            "appName",
            "must start with a lowercase letter and contain only a-z, 0-9 and '-'",
        ));
    }
    Ok(())
}

/// Canvas data must be a JSON document within the size limit
pub fn check_canvas_data(data: &str, limits: &Limits) -> ProjectResult<()> {
    if data.len() > limits.max_canvas_bytes {
        return Err(ProjectError::invalid(
            "canvasData",
            format!("{} bytes exceeds the limit of {}", data.len(), limits.max_canvas_bytes),
        ));
    }
    serde_json::from_str::<serde_json::Value>(data)
        .map_err(|e| ProjectError::invalid("canvasData", format!("not valid JSON: {}", e)))?;
    Ok(())
}
