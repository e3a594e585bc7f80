//! Error types for the to-do domain
//!
//! Validation and lookup failures leave the in-memory task list untouched.
//! Corrupt data is only ever produced by `Storage::load`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TodoError {
    /// A field failed validation (e.g. an empty title)
    #[error("validation failed: {0}")]
    Validation(String),

    /// An operation referenced an id that is not in the task list
    #[error("task {0} not found")]
    NotFound(u64),

    /// The persisted file exists but cannot be interpreted
    #[error("corrupt task data in {path}: {reason}")]
    CorruptData { path: PathBuf, reason: String },

    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize tasks: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl TodoError {
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        TodoError::Validation(msg.into())
    }

    /// Whether the error came from bad caller input rather than the disk
    pub fn is_user_error(&self) -> bool {
        matches!(self, TodoError::Validation(_) | TodoError::NotFound(_))
    }
}

pub type TodoResult<T> = Result<T, TodoError>;
