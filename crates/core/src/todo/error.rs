use thiserror::Error;

/// Errors that can occur when validating todo fields.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TodoError {
    #[error("Todo title cannot be empty")]
    EmptyTitle,
    #[error("Todo title too long (max 500 characters)")]
    TitleTooLong,
    #[error("Todo description too long (max 2000 characters)")]
    DescriptionTooLong,
}
