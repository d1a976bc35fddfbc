//! API request and response types for todo operations.
//!
//! These types define the wire contract of the service. Following the
//! Functional Core pattern, these are pure data types with no I/O.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::types::Todo;

/// Request payload for creating a new todo.
///
/// `description` defaults to empty and `completed` to false when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodoRequest {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

impl CreateTodoRequest {
    /// Create a new request with just a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            completed: false,
        }
    }

    /// Set the todo description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the initial completion flag.
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

/// Request payload for a partial update of a todo.
///
/// Each field is independently present-or-absent; absent fields leave the
/// stored value untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTodoRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl UpdateTodoRequest {
    /// Create an empty update request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the todo title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the todo description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the completion flag.
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Apply the supplied fields to an existing todo and refresh its
    /// `updated_at` timestamp.
    pub fn apply_to(self, todo: &mut Todo) {
        todo.updated_at = Utc::now();

        if let Some(title) = self.title {
            todo.title = title;
        }
        if let Some(description) = self.description {
            todo.description = description;
        }
        if let Some(completed) = self.completed {
            todo.completed = completed;
        }
    }
}

/// Request payload for setting the completion flag of a todo.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CompleteTodoRequest {
    pub completed: bool,
}

/// Response payload for listing todos.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListTodosResponse {
    pub todos: Vec<Todo>,
    pub total: usize,
}
