//! Domain ↔ storage record conversion
//!
//! Pure functions, one pair per resource kind. `to_storage_record` never
//! forwards an id: the insert shapes have nowhere to put one.

use crate::db::entities::{NewNoteRecord, NewTaskRecord, NoteRecord, StatusColumn, TaskRecord};
use crate::domain::{Note, ResourceKind, Task, TaskStatus};

/// Ties a domain entity to its storage record shapes
///
/// Generic stores (the in-memory repository) work through this trait; the
/// SQL repositories call the per-kind functions directly.
pub trait Mapped: Clone + Send + Sync + 'static {
    /// Stored shape, carrying the id
    type Record: Clone + Send + Sync + 'static;
    /// Insert shape, without an id
    type NewRecord: Send + 'static;

    const KIND: ResourceKind;

    fn to_storage_record(&self) -> Self::NewRecord;
    fn to_domain(record: Self::Record) -> Self;
    fn record_id(record: &Self::Record) -> i64;
    /// Turn an insert shape into a stored record with a store-issued id
    fn assign_id(record: Self::NewRecord, id: i64) -> Self::Record;
}

pub mod notes {
    use super::*;

    pub fn to_domain(record: NoteRecord) -> Note {
        Note {
            id: Some(record.id),
            title: record.title,
            content: record.content,
            created_at: record.created_at,
        }
    }

    pub fn to_storage_record(note: &Note) -> NewNoteRecord {
        NewNoteRecord {
            title: note.title.clone(),
            content: note.content.clone(),
            created_at: note.created_at,
        }
    }
}

pub mod tasks {
    use super::*;

    pub fn status_to_column(status: TaskStatus) -> StatusColumn {
        match status {
            TaskStatus::New => StatusColumn::New,
            TaskStatus::Pending => StatusColumn::Pending,
            TaskStatus::Completed => StatusColumn::Completed,
            TaskStatus::Cancelled => StatusColumn::Cancelled,
        }
    }

    pub fn status_from_column(column: StatusColumn) -> TaskStatus {
        match column {
            StatusColumn::New => TaskStatus::New,
            StatusColumn::Pending => TaskStatus::Pending,
            StatusColumn::Completed => TaskStatus::Completed,
            StatusColumn::Cancelled => TaskStatus::Cancelled,
        }
    }

    pub fn to_domain(record: TaskRecord) -> Task {
        Task {
            id: Some(record.id),
            title: record.title,
            description: record.description,
            priority: record.priority,
            due_date: record.due_date,
            completed_at: record.completed_at,
            status: status_from_column(record.status),
            created_at: record.created_at,
        }
    }

    pub fn to_storage_record(task: &Task) -> NewTaskRecord {
        NewTaskRecord {
            title: task.title.clone(),
            description: task.description.clone(),
            priority: task.priority,
            created_at: task.created_at,
            due_date: task.due_date,
            completed_at: task.completed_at,
            status: status_to_column(task.status),
        }
    }
}

impl Mapped for Note {
    type Record = NoteRecord;
    type NewRecord = NewNoteRecord;

    const KIND: ResourceKind = ResourceKind::Note;

    fn to_storage_record(&self) -> NewNoteRecord {
        notes::to_storage_record(self)
    }

    fn to_domain(record: NoteRecord) -> Self {
        notes::to_domain(record)
    }

    fn record_id(record: &NoteRecord) -> i64 {
        record.id
    }

    fn assign_id(record: NewNoteRecord, id: i64) -> NoteRecord {
        record.into_record(id)
    }
}

impl Mapped for Task {
    type Record = TaskRecord;
    type NewRecord = NewTaskRecord;

    const KIND: ResourceKind = ResourceKind::Task;

    fn to_storage_record(&self) -> NewTaskRecord {
        tasks::to_storage_record(self)
    }

    fn to_domain(record: TaskRecord) -> Self {
        tasks::to_domain(record)
    }

    fn record_id(record: &TaskRecord) -> i64 {
        record.id
    }

    fn assign_id(record: NewTaskRecord, id: i64) -> TaskRecord {
        record.into_record(id)
    }
}
