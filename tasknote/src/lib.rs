//! tasknote library - notes and tasks record service
//!
//! Layers, leaf-first: domain model → mappers → repositories → services →
//! HTTP adapter. The repository behind the HTTP surface is either SQLite or
//! an in-memory store, chosen when [`AppState`] is built.

use axum::{extract::Request, Router};
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info_span;

pub mod api;
pub mod db;
pub mod domain;
pub mod repository;
pub mod service;
pub mod settings;

use domain::{Note, Task};
use repository::{InMemoryRepository, MemoryStore, SqlNotesRepository, SqlTasksRepository};
use service::{NoteService, TaskService};
use settings::SERVICE_NAME;

/// Storage behind the services
#[derive(Clone)]
pub enum Backend {
    /// SQLite pool; each request gets repositories over a pool handle
    Database(SqlitePool),
    /// Stores owned by this state and shared by every request
    Memory {
        notes: Arc<MemoryStore<Note>>,
        tasks: Arc<MemoryStore<Task>>,
    },
}

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    backend: Backend,
}

impl AppState {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }

    pub fn with_database(pool: SqlitePool) -> Self {
        Self::new(Backend::Database(pool))
    }

    /// Fresh, empty in-memory stores
    pub fn in_memory() -> Self {
        Self::new(Backend::Memory {
            notes: MemoryStore::shared(),
            tasks: MemoryStore::shared(),
        })
    }

    /// Note service wired to this state's storage
    pub fn note_service(&self) -> NoteService {
        match &self.backend {
            Backend::Database(pool) => NoteService::new(Arc::new(SqlNotesRepository::new(pool.clone()))),
            Backend::Memory { notes, .. } => {
                NoteService::new(Arc::new(InMemoryRepository::new(Arc::clone(notes))))
            }
        }
    }

    /// Task service wired to this state's storage
    pub fn task_service(&self) -> TaskService {
        match &self.backend {
            Backend::Database(pool) => TaskService::new(Arc::new(SqlTasksRepository::new(pool.clone()))),
            Backend::Memory { tasks, .. } => {
                TaskService::new(Arc::new(InMemoryRepository::new(Arc::clone(tasks))))
            }
        }
    }
}

/// Normalize a route prefix: `None` for root, otherwise `/x` without trailing slash
fn normalize_prefix(prefix: &str) -> Option<String> {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(format!("/{}", trimmed))
    }
}

/// Build application router
///
/// All routes are mounted under `api_prefix` (empty or `/` for root).
pub fn build_router(state: AppState, api_prefix: &str) -> Router {
    let routes = Router::new()
        .merge(api::health_routes())
        .merge(api::note_routes())
        .merge(api::task_routes())
        .with_state(state);

    let app = match normalize_prefix(api_prefix) {
        Some(prefix) => Router::new().nest(&prefix, routes),
        None => routes,
    };

    app.layer(
        TraceLayer::new_for_http().make_span_with(|request: &Request| {
            info_span!(
                "request",
                service = SERVICE_NAME,
                method = %request.method(),
                uri = %request.uri(),
            )
        }),
    )
    .layer(CorsLayer::permissive())
}
