//! HTTP API handlers for tasknote
//!
//! Services are composed per request by the extractors below, the way a
//! session provider hands each request its own repository.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use std::convert::Infallible;

use crate::service::{NoteService, TaskService};
use crate::AppState;

pub mod error;
pub mod health;
pub mod notes;
pub mod schemas;
pub mod tasks;

pub use error::ApiError;
pub use health::health_routes;
pub use notes::note_routes;
pub use tasks::task_routes;

#[async_trait]
impl FromRequestParts<AppState> for NoteService {
    type Rejection = Infallible;

    async fn from_request_parts(_parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        Ok(state.note_service())
    }
}

#[async_trait]
impl FromRequestParts<AppState> for TaskService {
    type Rejection = Infallible;

    async fn from_request_parts(_parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        Ok(state.task_service())
    }
}
