//! Note use cases

use std::sync::Arc;
use tasknote_common::time;
use tracing::info;

use crate::domain::{NewNote, Note};
use crate::repository::{Repository, Result};

/// Creates, reads and deletes notes through a repository
#[derive(Clone)]
pub struct NoteService {
    repository: Arc<dyn Repository<Note>>,
}

impl NoteService {
    pub fn new(repository: Arc<dyn Repository<Note>>) -> Self {
        Self { repository }
    }

    /// Stamp `created_at` from the reference clock and persist
    pub async fn create(&self, request: NewNote) -> Result<Note> {
        let created_at = time::now();
        let note = Note {
            id: None,
            title: request.title,
            content: request.content,
            created_at,
        };
        info!(title = %note.title, created_at = %time::to_isoz(&created_at), "Creating note");
        self.repository.add(note).await
    }

    pub async fn get(&self, note_id: i64) -> Result<Note> {
        info!(note_id, "Fetching note");
        self.repository.get(note_id).await
    }

    pub async fn get_all(&self) -> Result<Vec<Note>> {
        info!("Fetching all notes");
        self.repository.get_all().await
    }

    pub async fn delete(&self, note_id: i64) -> Result<()> {
        info!(note_id, "Deleting note");
        self.repository.delete(note_id).await
    }
}
