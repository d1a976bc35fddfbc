use super::error::TodoError;
use super::requests::{CreateTodoRequest, UpdateTodoRequest};

/// Validates a todo title.
///
/// Titles must contain at least one non-whitespace character and at most
/// 500 characters.
pub fn validate_title(title: &str) -> Result<(), TodoError> {
    if title.trim().is_empty() {
        return Err(TodoError::EmptyTitle);
    }
    if title.chars().count() > 500 {
        return Err(TodoError::TitleTooLong);
    }
    Ok(())
}

/// Validates a todo description (max 2000 characters).
pub fn validate_description(description: &str) -> Result<(), TodoError> {
    if description.chars().count() > 2000 {
        return Err(TodoError::DescriptionTooLong);
    }
    Ok(())
}

/// Validates a create request before it reaches the store.
pub fn validate_create(request: &CreateTodoRequest) -> Result<(), TodoError> {
    validate_title(&request.title)?;
    if let Some(description) = &request.description {
        validate_description(description)?;
    }
    Ok(())
}

/// Validates a partial update request before it reaches the store.
///
/// Only supplied fields are checked; an empty request is valid.
pub fn validate_update(request: &UpdateTodoRequest) -> Result<(), TodoError> {
    if let Some(title) = &request.title {
        validate_title(title)?;
    }
    if let Some(description) = &request.description {
        validate_description(description)?;
    }
    Ok(())
}
