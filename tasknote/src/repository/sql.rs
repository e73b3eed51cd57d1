//! SQLite-backed repositories
//!
//! Each repository is built per request around a pool handle from the
//! session provider. Two-step operations hold one pooled connection for both
//! statements:
//! - `add`: insert, then reload the row by its new id
//! - `delete`: look up by id, then delete; a delete that removes nothing
//!   (the row vanished in between) is also reported as not found

use async_trait::async_trait;
use sqlx::SqlitePool;

use super::{Repository, Result};
use crate::db::entities::{NoteRecord, TaskRecord};
use crate::db::mappers::{notes, tasks};
use crate::domain::{Note, NotFoundError, Task};

const SELECT_NOTE: &str = "SELECT id, title, content, created_at FROM notes";

const SELECT_TASK: &str = "SELECT id, title, description, priority, created_at, \
                           due_date, completed_at, status FROM tasks";

/// Notes stored in the `notes` table
#[derive(Clone)]
pub struct SqlNotesRepository {
    pool: SqlitePool,
}

impl SqlNotesRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Note> for SqlNotesRepository {
    async fn add(&self, note: Note) -> Result<Note> {
        let record = notes::to_storage_record(&note);
        let mut conn = self.pool.acquire().await?;

        let id = sqlx::query("INSERT INTO notes (title, content, created_at) VALUES (?, ?, ?)")
            .bind(&record.title)
            .bind(&record.content)
            .bind(record.created_at)
            .execute(&mut *conn)
            .await?
            .last_insert_rowid();

        let stored: NoteRecord = sqlx::query_as(&format!("{} WHERE id = ?", SELECT_NOTE))
            .bind(id)
            .fetch_one(&mut *conn)
            .await?;

        Ok(notes::to_domain(stored))
    }

    async fn get(&self, id: i64) -> Result<Note> {
        let stored: Option<NoteRecord> = sqlx::query_as(&format!("{} WHERE id = ?", SELECT_NOTE))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        stored
            .map(notes::to_domain)
            .ok_or_else(|| NotFoundError::NoteNotFound(id).into())
    }

    async fn get_all(&self) -> Result<Vec<Note>> {
        let stored: Vec<NoteRecord> = sqlx::query_as(&format!("{} ORDER BY id ASC", SELECT_NOTE))
            .fetch_all(&self.pool)
            .await?;

        Ok(stored.into_iter().map(notes::to_domain).collect())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut conn = self.pool.acquire().await?;

        let found: Option<i64> = sqlx::query_scalar("SELECT id FROM notes WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        if found.is_none() {
            return Err(NotFoundError::NoteNotFound(id).into());
        }

        let removed = sqlx::query("DELETE FROM notes WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?
            .rows_affected();
        if removed == 0 {
            return Err(NotFoundError::NoteNotFound(id).into());
        }

        Ok(())
    }
}

/// Tasks stored in the `tasks` table
#[derive(Clone)]
pub struct SqlTasksRepository {
    pool: SqlitePool,
}

impl SqlTasksRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Task> for SqlTasksRepository {
    async fn add(&self, task: Task) -> Result<Task> {
        let record = tasks::to_storage_record(&task);
        let mut conn = self.pool.acquire().await?;

        let id = sqlx::query(
            r#"
            INSERT INTO tasks (title, description, priority, created_at, due_date, completed_at, status)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&record.title)
        .bind(&record.description)
        .bind(record.priority)
        .bind(record.created_at)
        .bind(record.due_date)
        .bind(record.completed_at)
        .bind(record.status)
        .execute(&mut *conn)
        .await?
        .last_insert_rowid();

        let stored: TaskRecord = sqlx::query_as(&format!("{} WHERE id = ?", SELECT_TASK))
            .bind(id)
            .fetch_one(&mut *conn)
            .await?;

        Ok(tasks::to_domain(stored))
    }

    async fn get(&self, id: i64) -> Result<Task> {
        let stored: Option<TaskRecord> = sqlx::query_as(&format!("{} WHERE id = ?", SELECT_TASK))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        stored
            .map(tasks::to_domain)
            .ok_or_else(|| NotFoundError::TaskNotFound(id).into())
    }

    async fn get_all(&self) -> Result<Vec<Task>> {
        let stored: Vec<TaskRecord> = sqlx::query_as(&format!("{} ORDER BY id ASC", SELECT_TASK))
            .fetch_all(&self.pool)
            .await?;

        Ok(stored.into_iter().map(tasks::to_domain).collect())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut conn = self.pool.acquire().await?;

        let found: Option<i64> = sqlx::query_scalar("SELECT id FROM tasks WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        if found.is_none() {
            return Err(NotFoundError::TaskNotFound(id).into());
        }

        let removed = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?
            .rows_affected();
        if removed == 0 {
            return Err(NotFoundError::TaskNotFound(id).into());
        }

        Ok(())
    }
}
