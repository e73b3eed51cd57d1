//! Note endpoints

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};

use super::error::ApiError;
use super::schemas::{NoteCreate, NoteRead};
use crate::service::NoteService;
use crate::AppState;

/// POST /notes
pub async fn create_note(
    service: NoteService,
    payload: Result<Json<NoteCreate>, JsonRejection>,
) -> Result<Json<NoteRead>, ApiError> {
    let Json(body) = payload?;
    let note = service.create(body.validate()?).await?;
    Ok(Json(note.into()))
}

/// GET /notes
pub async fn list_notes(service: NoteService) -> Result<Json<Vec<NoteRead>>, ApiError> {
    let notes = service.get_all().await?;
    Ok(Json(notes.into_iter().map(NoteRead::from).collect()))
}

/// GET /notes/:note_id
pub async fn get_note(
    service: NoteService,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<NoteRead>, ApiError> {
    let Path(note_id) = path?;
    Ok(Json(service.get(note_id).await?.into()))
}

/// DELETE /notes/:note_id
///
/// 204 with no body on success.
pub async fn delete_note(
    service: NoteService,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(note_id) = path?;
    service.delete(note_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn note_routes() -> Router<AppState> {
    Router::new()
        .route("/notes", get(list_notes).post(create_note))
        .route("/notes/:note_id", get(get_note).delete(delete_note))
}
