//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repository,
//! following the Functional Core pattern - pure data, no I/O.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
-- Todos table
CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    completed INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
"#;

// Todo queries
pub const INSERT_TODO: &str = r#"
INSERT INTO todos (title, description, completed, created_at, updated_at)
VALUES (?1, ?2, ?3, ?4, ?5)
"#;

pub const SELECT_TODO_BY_ID: &str = r#"
SELECT id, title, description, completed, created_at, updated_at
FROM todos
WHERE id = ?1
"#;

pub const SELECT_ALL_TODOS: &str = r#"
SELECT id, title, description, completed, created_at, updated_at
FROM todos
ORDER BY id ASC
"#;

pub const UPDATE_TODO: &str = r#"
UPDATE todos
SET title = ?2, description = ?3, completed = ?4, updated_at = ?5
WHERE id = ?1
"#;

pub const UPDATE_TODO_COMPLETED: &str = r#"
UPDATE todos
SET completed = ?2, updated_at = ?3
WHERE id = ?1
"#;

pub const DELETE_TODO: &str = r#"
DELETE FROM todos
WHERE id = ?1
"#;
