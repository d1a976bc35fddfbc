use async_trait::async_trait;

use crate::todo::{CreateTodoRequest, Todo, UpdateTodoRequest};

use super::Result;

/// Repository for todo operations.
///
/// Every method executes as one atomic unit of work: either fully applied
/// and committed, or fully rolled back.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Creates a new todo, assigning its id and timestamps.
    async fn create_todo(&self, request: CreateTodoRequest) -> Result<Todo>;

    /// Lists all todos ordered by ascending id.
    async fn list_todos(&self) -> Result<Vec<Todo>>;

    /// Gets a todo by its ID.
    async fn get_todo(&self, id: i64) -> Result<Todo>;

    /// Applies a partial update, refreshing `updated_at` and leaving
    /// unsupplied fields untouched.
    async fn update_todo(&self, id: i64, request: UpdateTodoRequest) -> Result<Todo>;

    /// Sets only the completion flag and `updated_at` of an existing todo.
    async fn set_completed(&self, id: i64, completed: bool) -> Result<Todo>;

    /// Deletes a todo by its ID.
    async fn delete_todo(&self, id: i64) -> Result<()>;
}
