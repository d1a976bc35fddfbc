//! SQLite connection management.
//!
//! Owns the background connection and exposes a scoped transaction API.
//! Repository methods never touch the connection directly; they hand a
//! closure to [`Database::transaction`] and get commit-on-success,
//! rollback-on-failure semantics for free.

use std::path::Path;

use rusqlite::Transaction;
use todolite_core::storage::RepositoryError;
use tokio_rusqlite::Connection;

use super::schema;

/// Wrap a rusqlite error into a tokio_rusqlite error.
pub(super) fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Handle to the SQLite connection running on its own worker thread.
///
/// Cloning is cheap; all clones talk to the same connection.
#[derive(Clone)]
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database file at `path` and prepare the schema.
    ///
    /// The file must already exist. Creating the store is an operator
    /// concern, so a missing file fails with `ConnectionFailed` instead of
    /// silently materializing an empty database.
    pub async fn open(path: &str) -> Result<Self, RepositoryError> {
        if !Path::new(path).exists() {
            return Err(RepositoryError::ConnectionFailed(format!(
                "Database file not found: {path}"
            )));
        }

        let conn = Connection::open(path.to_string())
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        let db = Self { conn };
        db.init_schema().await?;
        Ok(db)
    }

    /// Open an in-memory database (for testing).
    pub async fn open_in_memory() -> Result<Self, RepositoryError> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        let db = Self { conn };
        db.init_schema().await?;
        Ok(db)
    }

    /// Create tables if they don't exist.
    async fn init_schema(&self) -> Result<(), RepositoryError> {
        self.conn
            .call(|conn| conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err))
            .await
            .map_err(|e| RepositoryError::QueryFailed(format!("Failed to initialize schema: {e}")))
    }

    /// Run `work` inside a single transaction on the worker thread.
    ///
    /// The transaction commits when `work` returns Ok. When `work` returns
    /// Err, the transaction handle is dropped unfinished, which rolls back
    /// every statement it executed. Either way the connection is released
    /// back to the worker for the next caller.
    pub async fn transaction<T, F>(&self, work: F) -> tokio_rusqlite::Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&Transaction<'_>) -> rusqlite::Result<T> + Send + 'static,
    {
        self.conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                let value = work(&tx).map_err(wrap_err)?;
                tx.commit().map_err(wrap_err)?;
                Ok(value)
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_TIMESTAMP: &str = "2024-06-15T10:30:00+00:00";

    #[tokio::test]
    async fn test_open_fails_when_file_is_missing() {
        let result = Database::open("/nonexistent/path/todos.db").await;

        assert!(matches!(result, Err(RepositoryError::ConnectionFailed(_))));
    }

    #[tokio::test]
    async fn test_transaction_commits_on_success() {
        let db = Database::open_in_memory().await.unwrap();

        db.transaction(|tx| {
            tx.execute(
                schema::INSERT_TODO,
                rusqlite::params!["Buy milk", "", false, SAMPLE_TIMESTAMP, SAMPLE_TIMESTAMP],
            )?;
            Ok(())
        })
        .await
        .unwrap();

        let total: i64 = db
            .transaction(|tx| tx.query_row("SELECT COUNT(*) FROM todos", [], |row| row.get(0)))
            .await
            .unwrap();
        assert_eq!(total, 1);
    }

    #[tokio::test]
    async fn test_transaction_rolls_back_on_error() {
        let db = Database::open_in_memory().await.unwrap();

        let result: tokio_rusqlite::Result<()> = db
            .transaction(|tx| {
                tx.execute(
                    schema::INSERT_TODO,
                    rusqlite::params!["Doomed", "", false, SAMPLE_TIMESTAMP, SAMPLE_TIMESTAMP],
                )?;
                Err(rusqlite::Error::QueryReturnedNoRows)
            })
            .await;
        assert!(result.is_err());

        // The insert must not survive the failed transaction
        let total: i64 = db
            .transaction(|tx| tx.query_row("SELECT COUNT(*) FROM todos", [], |row| row.get(0)))
            .await
            .unwrap();
        assert_eq!(total, 0);
    }

    #[tokio::test]
    async fn test_connection_is_released_after_failure() {
        let db = Database::open_in_memory().await.unwrap();

        let failed: tokio_rusqlite::Result<()> = db
            .transaction(|tx| tx.query_row("SELECT missing FROM nowhere", [], |_| Ok(())))
            .await;
        assert!(failed.is_err());

        // The next transaction on the same connection still works
        db.transaction(|tx| {
            tx.execute(
                schema::INSERT_TODO,
                rusqlite::params!["Alive", "", false, SAMPLE_TIMESTAMP, SAMPLE_TIMESTAMP],
            )?;
            Ok(())
        })
        .await
        .unwrap();
    }
}
