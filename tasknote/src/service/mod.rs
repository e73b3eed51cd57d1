//! Service layer
//!
//! One service per resource kind. Services own creation-time invariants
//! (timestamp, defaults) and otherwise forward to their repository;
//! not-found errors pass through unchanged.

pub mod note_service;
pub mod task_service;

pub use note_service::NoteService;
pub use task_service::TaskService;
