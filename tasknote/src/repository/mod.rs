//! Repository contract and its storage variants
//!
//! A repository exposes add / get / get_all / delete over one resource kind.
//! Two variants satisfy the same contract:
//! - [`InMemoryRepository`]: process-lifetime store, shared through a
//!   [`MemoryStore`] handle
//! - [`SqlNotesRepository`] / [`SqlTasksRepository`]: SQLite-backed

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::NotFoundError;

pub mod memory;
pub mod sql;

pub use memory::{InMemoryRepository, MemoryStore};
pub use sql::{SqlNotesRepository, SqlTasksRepository};

/// Repository failures
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// No record with the requested id
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// Backend fault, passed through without interpretation
    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

impl RepositoryError {
    /// The not-found details, if this is a not-found error
    pub fn as_not_found(&self) -> Option<&NotFoundError> {
        match self {
            RepositoryError::NotFound(e) => Some(e),
            RepositoryError::Storage(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;

/// Storage contract for one resource kind `E`
#[async_trait]
pub trait Repository<E>: Send + Sync {
    /// Persist a new entity; the returned copy carries the storage-assigned id
    ///
    /// Any id already set on `entity` is ignored.
    async fn add(&self, entity: E) -> Result<E>;

    /// Fetch one entity, or `NotFound` carrying `id`
    async fn get(&self, id: i64) -> Result<E>;

    /// Every stored entity, in the backend's iteration order
    async fn get_all(&self) -> Result<Vec<E>>;

    /// Hard-delete one entity, or `NotFound` carrying `id`
    async fn delete(&self, id: i64) -> Result<()>;
}
