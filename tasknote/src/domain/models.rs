//! Domain entities
//!
//! Plain data, independent of any storage backend. An entity with
//! `id == None` has not been persisted yet.

use chrono::{DateTime, Utc};
use std::fmt;

/// A free-form note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    /// Storage-assigned identifier, `None` until first persisted
    pub id: Option<i64>,
    pub title: String,
    pub content: Option<String>,
    /// Set once by the service at creation time
    pub created_at: DateTime<Utc>,
}

/// Task lifecycle state
///
/// Only `New` is produced today; there is no transition operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TaskStatus {
    #[default]
    New,
    Pending,
    Completed,
    Cancelled,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::New => "NEW",
            TaskStatus::Pending => "PENDING",
            TaskStatus::Completed => "COMPLETED",
            TaskStatus::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A unit of work with optional scheduling fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    /// Ordinal priority, lower is more urgent by convention
    pub priority: Option<i32>,
    pub due_date: Option<DateTime<Utc>>,
    /// Always `None` until a completion transition exists
    pub completed_at: Option<DateTime<Utc>>,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
}

/// Fields a caller supplies to create a note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    pub title: String,
    pub content: Option<String>,
}

impl NewNote {
    pub fn new(title: impl Into<String>, content: Option<String>) -> Self {
        Self {
            title: title.into(),
            content,
        }
    }
}

/// Fields a caller supplies to create a task
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<i32>,
    pub due_date: Option<DateTime<Utc>>,
}

impl NewTask {
    /// A task request with only the required title
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_status_strings() {
        assert_eq!(TaskStatus::New.as_str(), "NEW");
        assert_eq!(TaskStatus::Pending.to_string(), "PENDING");
        assert_eq!(TaskStatus::Completed.as_str(), "COMPLETED");
        assert_eq!(TaskStatus::Cancelled.as_str(), "CANCELLED");
        assert_eq!(TaskStatus::default(), TaskStatus::New);
    }

    #[test]
    fn test_new_task_titled_leaves_optionals_empty() {
        let request = NewTask::titled("T");
        assert_eq!(request.title, "T");
        assert!(request.description.is_none());
        assert!(request.priority.is_none());
        assert!(request.due_date.is_none());
    }
}
