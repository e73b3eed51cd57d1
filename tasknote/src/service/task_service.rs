//! Task use cases

use std::sync::Arc;
use tasknote_common::time;
use tracing::info;

use crate::domain::{NewTask, Task, TaskStatus};
use crate::repository::{Repository, Result};

/// Creates, reads and deletes tasks through a repository
#[derive(Clone)]
pub struct TaskService {
    repository: Arc<dyn Repository<Task>>,
}

impl TaskService {
    pub fn new(repository: Arc<dyn Repository<Task>>) -> Self {
        Self { repository }
    }

    /// Stamp `created_at`, apply defaults (`NEW`, not completed) and persist
    pub async fn create(&self, request: NewTask) -> Result<Task> {
        let created_at = time::now();
        let task = Task {
            id: None,
            title: request.title,
            description: request.description,
            priority: request.priority,
            due_date: request.due_date,
            completed_at: None,
            status: TaskStatus::New,
            created_at,
        };
        info!(title = %task.title, created_at = %time::to_isoz(&created_at), "Creating task");
        self.repository.add(task).await
    }

    pub async fn get(&self, task_id: i64) -> Result<Task> {
        info!(task_id, "Fetching task");
        self.repository.get(task_id).await
    }

    pub async fn get_all(&self) -> Result<Vec<Task>> {
        info!("Fetching all tasks");
        self.repository.get_all().await
    }

    pub async fn delete(&self, task_id: i64) -> Result<()> {
        info!(task_id, "Deleting task");
        self.repository.delete(task_id).await
    }
}
