//! Request handlers for task CRUD.

use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};
use tracing::info;
use tracker::{CreateTask, Task, UpdateTask};

use crate::error::ApiError;
use crate::server::AppState;

/// List all tasks.
pub async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = state.service.list_tasks().await?;
    Ok(Json(tasks))
}

/// Create a task.
pub async fn create_task(
    State(state): State<AppState>,
    Json(request): Json<CreateTask>,
) -> Result<Json<Task>, ApiError> {
    let task = state.service.create_task(request).await?;

    info!(task_id = task.id, title = %task.title, "Created task");

    Ok(Json(task))
}

/// Replace a task's title and status.
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(request): Json<UpdateTask>,
) -> Result<Json<Task>, ApiError> {
    let task = state.service.update_task(id, request).await?;

    info!(task_id = task.id, status = %task.status, "Updated task");

    Ok(Json(task))
}

/// Delete a task.
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Value>, ApiError> {
    state.service.delete_task(id).await?;

    info!(task_id = id, "Deleted task");

    Ok(Json(json!({ "status": "deleted", "id": id })))
}
