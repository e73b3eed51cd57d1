//! Task endpoints

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
use super::schemas::{TaskCreate, TaskRead};
use crate::service::TaskService;
use crate::AppState;

/// POST /tasks
pub async fn create_task(
    service: TaskService,
    payload: Result<Json<TaskCreate>, JsonRejection>,
) -> Result<Json<TaskRead>, ApiError> {
    let Json(body) = payload?;
    let task = service.create(body.validate()?).await?;
    Ok(Json(task.into()))
}

/// GET /tasks
pub async fn list_tasks(service: TaskService) -> Result<Json<Vec<TaskRead>>, ApiError> {
    let tasks = service.get_all().await?;
    Ok(Json(tasks.into_iter().map(TaskRead::from).collect()))
}

/// GET /tasks/:task_id
pub async fn get_task(
    service: TaskService,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<TaskRead>, ApiError> {
    let Path(task_id) = path?;
    Ok(Json(service.get(task_id).await?.into()))
}

/// DELETE /tasks/:task_id
pub async fn delete_task(
    service: TaskService,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(task_id) = path?;
    service.delete(task_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn task_routes() -> Router<AppState> {
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route("/tasks/:task_id", get(get_task).delete(delete_task))
}
