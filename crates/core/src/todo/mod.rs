mod error;
mod operations;
mod requests;
mod types;

pub use error::TodoError;
pub use operations::{validate_create, validate_description, validate_title, validate_update};
pub use requests::{CompleteTodoRequest, CreateTodoRequest, ListTodosResponse, UpdateTodoRequest};
pub use types::Todo;
