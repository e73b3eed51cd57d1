//! Service layer tests
//!
//! Services run over the in-memory repository, plus a stub that fails every
//! call to check that errors pass through untouched.

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use std::sync::Arc;
use tasknote::domain::{NewNote, NewTask, NotFoundError, Note, Task, TaskStatus};
use tasknote::repository::{InMemoryRepository, MemoryStore, Repository, RepositoryError, Result};
use tasknote::service::{NoteService, TaskService};

fn note_service() -> NoteService {
    NoteService::new(Arc::new(InMemoryRepository::new(MemoryStore::<Note>::shared())))
}

fn task_service() -> TaskService {
    TaskService::new(Arc::new(InMemoryRepository::new(MemoryStore::<Task>::shared())))
}

/// Repository whose every call fails with a storage fault
struct UnavailableRepository;

#[async_trait]
impl<E: Send + 'static> Repository<E> for UnavailableRepository {
    async fn add(&self, _entity: E) -> Result<E> {
        Err(sqlx::Error::PoolClosed.into())
    }

    async fn get(&self, _id: i64) -> Result<E> {
        Err(sqlx::Error::PoolClosed.into())
    }

    async fn get_all(&self) -> Result<Vec<E>> {
        Err(sqlx::Error::PoolClosed.into())
    }

    async fn delete(&self, _id: i64) -> Result<()> {
        Err(sqlx::Error::PoolClosed.into())
    }
}

#[tokio::test]
async fn test_create_note_stamps_created_at() {
    let service = note_service();
    let before = Utc::now();

    let note = service
        .create(NewNote::new("Test Note", Some("This is a test note".to_string())))
        .await
        .unwrap();

    assert_eq!(note.id, Some(1));
    assert_eq!(note.title, "Test Note");
    assert_eq!(note.content.as_deref(), Some("This is a test note"));
    assert!(note.created_at >= before);
    assert!(note.created_at <= Utc::now());
}

#[tokio::test]
async fn test_get_after_create_returns_same_note() {
    let service = note_service();
    let created = service.create(NewNote::new("Get Test", None)).await.unwrap();

    let fetched = service.get(created.id.unwrap()).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_get_missing_note_propagates_not_found() {
    let service = note_service();

    match service.get(9999).await {
        Err(RepositoryError::NotFound(e)) => {
            assert_eq!(e, NotFoundError::NoteNotFound(9999));
            assert_eq!(e.to_string(), "Note not found: 9999");
        }
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_delete_note_then_get_is_not_found() {
    let service = note_service();
    let id = service
        .create(NewNote::new("Delete Test", None))
        .await
        .unwrap()
        .id
        .unwrap();

    service.delete(id).await.unwrap();

    let err = service.get(id).await.unwrap_err();
    assert_eq!(err.as_not_found(), Some(&NotFoundError::NoteNotFound(id)));
    let err = service.delete(id).await.unwrap_err();
    assert_eq!(err.as_not_found(), Some(&NotFoundError::NoteNotFound(id)));
}

#[tokio::test]
async fn test_get_all_notes_lists_every_created_note() {
    let service = note_service();
    assert!(service.get_all().await.unwrap().is_empty());

    for i in 0..3 {
        service
            .create(NewNote::new(format!("List Test Note {}", i), None))
            .await
            .unwrap();
    }

    let notes = service.get_all().await.unwrap();
    assert_eq!(notes.len(), 3);
    assert_eq!(notes[0].title, "List Test Note 0");
    assert_eq!(notes[2].title, "List Test Note 2");
}

#[tokio::test]
async fn test_task_created_with_title_only_gets_defaults() {
    let service = task_service();

    let task = service.create(NewTask::titled("Only a title")).await.unwrap();

    assert_eq!(task.id, Some(1));
    assert_eq!(task.status, TaskStatus::New);
    assert!(task.description.is_none());
    assert!(task.priority.is_none());
    assert!(task.due_date.is_none());
    assert!(task.completed_at.is_none());
}

#[tokio::test]
async fn test_task_create_keeps_request_fields() {
    let service = task_service();
    let due = Utc.with_ymd_and_hms(2025, 5, 9, 12, 34, 56).unwrap();
    let before = Utc::now();

    let task = service
        .create(NewTask {
            title: "Test Task".to_string(),
            description: Some("Test task description".to_string()),
            priority: Some(1),
            due_date: Some(due),
        })
        .await
        .unwrap();

    assert_eq!(task.description.as_deref(), Some("Test task description"));
    assert_eq!(task.priority, Some(1));
    assert_eq!(task.due_date, Some(due));
    assert!(task.created_at >= before);
    assert!(task.created_at - before < Duration::seconds(5));
}

#[tokio::test]
async fn test_missing_task_propagates_not_found() {
    let service = task_service();

    let err = service.get(9999).await.unwrap_err();
    assert_eq!(err.as_not_found(), Some(&NotFoundError::TaskNotFound(9999)));
    let err = service.delete(9999).await.unwrap_err();
    assert_eq!(err.to_string(), "Task not found: 9999");
}

#[tokio::test]
async fn test_storage_errors_pass_through_unchanged() {
    let notes = NoteService::new(Arc::new(UnavailableRepository));
    let tasks = TaskService::new(Arc::new(UnavailableRepository));

    assert!(matches!(
        notes.create(NewNote::new("n", None)).await,
        Err(RepositoryError::Storage(sqlx::Error::PoolClosed))
    ));
    assert!(matches!(notes.get(1).await, Err(RepositoryError::Storage(_))));
    assert!(matches!(tasks.get_all().await, Err(RepositoryError::Storage(_))));
    assert!(matches!(tasks.delete(1).await, Err(RepositoryError::Storage(_))));
}
