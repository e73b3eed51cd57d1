//! Storage record shapes
//!
//! `*Record` types mirror a stored row and always carry the storage-assigned
//! id. `New*Record` types are the insert shape and have no id field at all.

use chrono::{DateTime, Utc};

/// Row of the `notes` table
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct NoteRecord {
    pub id: i64,
    pub title: String,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert shape for `notes`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNoteRecord {
    pub title: String,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl NewNoteRecord {
    /// Attach the id issued by a store
    pub fn into_record(self, id: i64) -> NoteRecord {
        NoteRecord {
            id,
            title: self.title,
            content: self.content,
            created_at: self.created_at,
        }
    }
}

/// `tasks.status` column values
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(rename_all = "UPPERCASE")]
pub enum StatusColumn {
    New,
    Pending,
    Completed,
    Cancelled,
}

/// Row of the `tasks` table
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct TaskRecord {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub due_date: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub status: StatusColumn,
}

/// Insert shape for `tasks`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTaskRecord {
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub due_date: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub status: StatusColumn,
}

impl NewTaskRecord {
    pub fn into_record(self, id: i64) -> TaskRecord {
        TaskRecord {
            id,
            title: self.title,
            description: self.description,
            priority: self.priority,
            created_at: self.created_at,
            due_date: self.due_date,
            completed_at: self.completed_at,
            status: self.status,
        }
    }
}
