use tessera_editor::EditorError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("Page not found: {0}")]
    PageNotFound(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Malformed canvas data: {0}")]
    MalformedCanvas(String),

    #[error("Encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Failures reported by the editing surface
#[derive(Error, Debug)]
pub enum SurfaceError {
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    #[error("Editing surface unavailable: {0}")]
    Unavailable(String),
}

impl From<EditorError> for SurfaceError {
    fn from(e: EditorError) -> Self {
        if e.is_malformed() {
            SurfaceError::MalformedDocument(e.to_string())
        } else {
            SurfaceError::Unavailable(e.to_string())
        }
    }
}
