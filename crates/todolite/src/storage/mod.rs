//! Storage backend implementations.
//!
//! This module provides the concrete implementation of the repository trait
//! defined in `todolite_core::storage`.

pub mod sqlite;

pub use sqlite::SqliteRepository;
