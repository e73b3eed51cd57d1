//! Persistence-agnostic domain model

pub mod error;
pub mod models;

pub use error::{NotFoundError, ResourceKind};
pub use models::{NewNote, NewTask, Note, Task, TaskStatus};
