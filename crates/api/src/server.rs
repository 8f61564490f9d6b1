//! HTTP server for the task tracker.

use std::sync::Arc;

use axum::{
    extract::State,
    response::Json,
    routing::{get, put},
    Router,
};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;
use tracker::TaskService;

use crate::handlers::{create_task, delete_task, list_tasks, update_task};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Task service over the configured storage backend.
    pub service: Arc<TaskService>,
}

/// Build the HTTP router for the task API.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Task CRUD
        .route("/tasks", get(list_tasks).post(create_task))
        .route("/tasks/{id}", put(update_task).delete(delete_task))
        // Health check
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// Readiness check endpoint.
async fn readiness_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ready",
        "storage": state.service.storage_type()
    }))
}
