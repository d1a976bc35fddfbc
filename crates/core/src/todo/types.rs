use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A task tracked by the service.
///
/// `id` is assigned by the store and immutable afterwards. `updated_at`
/// starts equal to `created_at` and is refreshed on every mutation, so
/// `updated_at >= created_at` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
