//! Shared application state.

use std::sync::Arc;

use todolite_core::storage::TodoRepository;

use crate::config::Config;
use crate::storage::SqliteRepository;

/// Shared application state.
///
/// This is cloned for each request handler and contains the repository
/// trait object for database access.
#[derive(Clone)]
pub struct AppState {
    /// Todo repository backing all /todos routes.
    pub todo_repo: Arc<dyn TodoRepository>,
}

impl AppState {
    /// Creates AppState with SQLite storage at the configured path.
    pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
        let todo_repo: Arc<dyn TodoRepository> =
            Arc::new(SqliteRepository::open(&config.sqlite_path).await?);

        Ok(Self { todo_repo })
    }

    /// Creates AppState with an in-memory database.
    ///
    /// Only used by tests - data is lost when the state is dropped.
    #[cfg(test)]
    pub async fn in_memory() -> Self {
        let todo_repo: Arc<dyn TodoRepository> = Arc::new(
            SqliteRepository::open_in_memory()
                .await
                .expect("in-memory database"),
        );

        Self { todo_repo }
    }
}
