use thiserror::Error;

/// Errors raised by the tree store and the save endpoint.
#[derive(Debug, Error)]
pub enum TreeError {
    /// Missing or malformed required input.
    #[error("Validation error: {0}")]
    Validation(String),

    /// An id that does not name a person in the tree.
    #[error("Person not found: {0}")]
    Reference(String),

    /// Malformed JSON, or a document missing `people` or `relationships`.
    #[error("Invalid family tree document: {0}")]
    Format(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TreeError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

impl From<serde_json::Error> for TreeError {
    fn from(e: serde_json::Error) -> Self {
        if e.is_io() {
            return Self::Io(e.into());
        }
        Self::Format(e.to_string())
    }
}

pub type Result<T, E = TreeError> = std::result::Result<T, E>;
