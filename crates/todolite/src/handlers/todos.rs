//! Todo resource handlers.
//!
//! Each handler is a thin translation layer: deserialize the payload, call
//! the repository, and let `ApiError` turn failures into status codes.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use todolite_core::todo::{
    CompleteTodoRequest, CreateTodoRequest, ListTodosResponse, Todo, UpdateTodoRequest,
};

use crate::state::AppState;

use super::error::ApiError;

// ============================================================================
// Create Todo
// ============================================================================

/// Create a new todo (POST /todos).
#[axum::debug_handler]
pub async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let Json(request) = payload?;
    tracing::debug!(request = ?request, "Received create todo request");

    let todo = state.todo_repo.create_todo(request).await?;

    tracing::info!(todo_id = todo.id, title = %todo.title, "Created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

// ============================================================================
// List Todos
// ============================================================================

/// List all todos (GET /todos).
///
/// Returns every todo in creation order along with the total count.
#[axum::debug_handler]
pub async fn list_todos(
    State(state): State<AppState>,
) -> Result<Json<ListTodosResponse>, ApiError> {
    let todos = state.todo_repo.list_todos().await?;
    let total = todos.len();

    Ok(Json(ListTodosResponse { todos, total }))
}

// ============================================================================
// Get Todo
// ============================================================================

/// Get a single todo by ID (GET /todos/{id}).
#[axum::debug_handler]
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Todo>, ApiError> {
    let todo = state.todo_repo.get_todo(id).await?;

    Ok(Json(todo))
}

// ============================================================================
// Update Todo
// ============================================================================

/// Partially update a todo (PATCH /todos/{id}).
///
/// Only the supplied fields change; `updated_at` is always refreshed.
#[axum::debug_handler]
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> Result<Json<Todo>, ApiError> {
    let Json(request) = payload?;
    tracing::debug!(todo_id = id, request = ?request, "Received update todo request");

    let todo = state.todo_repo.update_todo(id, request).await?;

    tracing::info!(todo_id = todo.id, title = %todo.title, "Updated todo");
    Ok(Json(todo))
}

// ============================================================================
// Complete Todo
// ============================================================================

/// Set the completed flag (PUT/PATCH /todos/{id}/complete).
#[axum::debug_handler]
pub async fn complete_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<CompleteTodoRequest>, JsonRejection>,
) -> Result<Json<Todo>, ApiError> {
    let Json(request) = payload?;

    let todo = state.todo_repo.set_completed(id, request.completed).await?;

    tracing::info!(todo_id = todo.id, completed = todo.completed, "Set todo completion");
    Ok(Json(todo))
}

// ============================================================================
// Delete Todo
// ============================================================================

/// Delete a todo (DELETE /todos/{id}).
///
/// Hard delete; a second delete of the same id is a 404.
#[axum::debug_handler]
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.todo_repo.delete_todo(id).await?;

    tracing::info!(todo_id = id, "Deleted todo");
    Ok(StatusCode::NO_CONTENT)
}
