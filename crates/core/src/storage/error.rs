use thiserror::Error;

use crate::todo::TodoError;

/// Errors that can occur during repository operations.
///
/// `Validation` carries the field-level detail from the domain layer;
/// `ConnectionFailed` and `QueryFailed` are storage failures, raised only
/// after the failing unit of work has been rolled back.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Todo not found: {id}")]
    NotFound { id: i64 },
    #[error("{0}")]
    Validation(#[from] TodoError),
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
