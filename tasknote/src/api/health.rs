//! Welcome and health check endpoints

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::settings::SERVICE_NAME;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: String,
}

/// Health check response: status, module name and version
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub module: String,
    pub version: String,
}

/// GET /
pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the TaskNote".to_string(),
    })
}

/// GET /health
///
/// Does not touch storage.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        module: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}
