//! Core domain types and storage contracts for the todolite project.
//!
//! Following the Functional Core pattern, everything in this crate is pure:
//! data types, validation rules, error taxonomy, and the repository trait.
//! Storage backends live in the server crate.

pub mod storage;
pub mod todo;
