//! Request and response bodies

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tasknote_common::time::isoz;

use super::error::ApiError;
use crate::domain::{NewNote, NewTask, Note, Task};

fn require_title(title: String) -> Result<String, ApiError> {
    if title.trim().is_empty() {
        return Err(ApiError::Validation("title must not be empty".to_string()));
    }
    Ok(title)
}

/// POST /notes body
#[derive(Debug, Deserialize)]
pub struct NoteCreate {
    pub title: String,
    pub content: Option<String>,
}

impl NoteCreate {
    pub fn validate(self) -> Result<NewNote, ApiError> {
        Ok(NewNote {
            title: require_title(self.title)?,
            content: self.content,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct NoteRead {
    pub id: Option<i64>,
    pub title: String,
    pub content: Option<String>,
    #[serde(with = "isoz")]
    pub created_at: DateTime<Utc>,
}

impl From<Note> for NoteRead {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            title: note.title,
            content: note.content,
            created_at: note.created_at,
        }
    }
}

/// POST /tasks body
#[derive(Debug, Deserialize)]
pub struct TaskCreate {
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<i32>,
    /// Any RFC 3339 offset is accepted and normalized to UTC
    pub due_date: Option<DateTime<Utc>>,
}

impl TaskCreate {
    pub fn validate(self) -> Result<NewTask, ApiError> {
        Ok(NewTask {
            title: require_title(self.title)?,
            description: self.description,
            priority: self.priority,
            due_date: self.due_date,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct TaskRead {
    pub id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<i32>,
    #[serde(with = "isoz::option")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(with = "isoz::option")]
    pub completed_at: Option<DateTime<Utc>>,
    pub status: String,
    #[serde(with = "isoz")]
    pub created_at: DateTime<Utc>,
}

impl From<Task> for TaskRead {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            title: task.title,
            description: task.description,
            priority: task.priority,
            due_date: task.due_date,
            completed_at: task.completed_at,
            status: task.status.as_str().to_string(),
            created_at: task.created_at,
        }
    }
}
