//! Domain error taxonomy
//!
//! `NotFoundError` is the only failure the core models. It is returned by
//! repositories and passed through services untouched; only the HTTP layer
//! turns it into a response.

use std::fmt;
use thiserror::Error;

/// The kinds of resource the service manages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Note,
    Task,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Note => f.write_str("Note"),
            ResourceKind::Task => f.write_str("Task"),
        }
    }
}

/// A requested identifier has no record
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundError {
    #[error("Note not found: {0}")]
    NoteNotFound(i64),

    #[error("Task not found: {0}")]
    TaskNotFound(i64),
}

impl NotFoundError {
    pub fn new(kind: ResourceKind, id: i64) -> Self {
        match kind {
            ResourceKind::Note => NotFoundError::NoteNotFound(id),
            ResourceKind::Task => NotFoundError::TaskNotFound(id),
        }
    }

    pub fn kind(&self) -> ResourceKind {
        match self {
            NotFoundError::NoteNotFound(_) => ResourceKind::Note,
            NotFoundError::TaskNotFound(_) => ResourceKind::Task,
        }
    }

    /// The identifier that was requested
    pub fn id(&self) -> i64 {
        match self {
            NotFoundError::NoteNotFound(id) | NotFoundError::TaskNotFound(id) => *id,
        }
    }
}
