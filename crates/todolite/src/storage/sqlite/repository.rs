//! SQLite repository implementation.
//!
//! Implements the repository trait from `todolite_core::storage` using SQLite.
//! Every operation runs in its own transaction via [`Database::transaction`],
//! so partial writes from a failed operation never become visible.

use async_trait::async_trait;
use chrono::Utc;
use rusqlite::params;

use todolite_core::storage::{RepositoryError, Result, TodoRepository};
use todolite_core::todo::{
    validate_create, validate_update, CreateTodoRequest, Todo, UpdateTodoRequest,
};

use super::conversions::{format_datetime, row_to_todo};
use super::database::Database;
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema;

/// SQLite-based todo repository.
///
/// Validation happens before any SQL runs, so invalid requests never
/// open a transaction.
#[derive(Clone)]
pub struct SqliteRepository {
    db: Database,
}

impl SqliteRepository {
    /// Opens a repository backed by the database file at `path`.
    ///
    /// The file must already exist; see [`Database::open`].
    pub async fn open(path: &str) -> Result<Self> {
        let db = Database::open(path).await?;
        Ok(Self { db })
    }

    /// Opens a repository backed by an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn open_in_memory() -> Result<Self> {
        let db = Database::open_in_memory().await?;
        Ok(Self { db })
    }
}

#[async_trait]
impl TodoRepository for SqliteRepository {
    async fn create_todo(&self, request: CreateTodoRequest) -> Result<Todo> {
        validate_create(&request)?;

        let now = format_datetime(&Utc::now());
        let title = request.title;
        let description = request.description.unwrap_or_default();
        let completed = request.completed;

        self.db
            .transaction(move |tx| {
                tx.execute(
                    schema::INSERT_TODO,
                    params![title, description, completed, now, now],
                )?;
                let id = tx.last_insert_rowid();
                tx.query_row(schema::SELECT_TODO_BY_ID, [id], row_to_todo)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn list_todos(&self) -> Result<Vec<Todo>> {
        self.db
            .transaction(|tx| {
                let mut stmt = tx.prepare(schema::SELECT_ALL_TODOS)?;
                let rows = stmt.query_map([], row_to_todo)?;
                rows.collect()
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn get_todo(&self, id: i64) -> Result<Todo> {
        self.db
            .transaction(move |tx| tx.query_row(schema::SELECT_TODO_BY_ID, [id], row_to_todo))
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, id))
    }

    async fn update_todo(&self, id: i64, request: UpdateTodoRequest) -> Result<Todo> {
        validate_update(&request)?;

        self.db
            .transaction(move |tx| {
                let mut todo = tx.query_row(schema::SELECT_TODO_BY_ID, [id], row_to_todo)?;
                request.apply_to(&mut todo);
                tx.execute(
                    schema::UPDATE_TODO,
                    params![
                        todo.id,
                        todo.title,
                        todo.description,
                        todo.completed,
                        format_datetime(&todo.updated_at)
                    ],
                )?;
                Ok(todo)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, id))
    }

    async fn set_completed(&self, id: i64, completed: bool) -> Result<Todo> {
        self.db
            .transaction(move |tx| {
                let updated_at = format_datetime(&Utc::now());
                let rows = tx.execute(
                    schema::UPDATE_TODO_COMPLETED,
                    params![id, completed, updated_at],
                )?;
                if rows == 0 {
                    return Err(rusqlite::Error::QueryReturnedNoRows);
                }
                tx.query_row(schema::SELECT_TODO_BY_ID, [id], row_to_todo)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, id))
    }

    async fn delete_todo(&self, id: i64) -> Result<()> {
        self.db
            .transaction(move |tx| {
                let rows = tx.execute(schema::DELETE_TODO, [id])?;
                if rows == 0 {
                    return Err(rusqlite::Error::QueryReturnedNoRows);
                }
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, id))
    }
}
