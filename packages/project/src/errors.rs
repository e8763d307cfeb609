use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjectError {
    #[error("Project not found: {0}")]
    NotFound(u64),

    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("Persistence unavailable: {0}")]
    PersistenceUnavailable(String),
}

impl ProjectError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ProjectError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

pub type ProjectResult<T> = Result<T, ProjectError>;
