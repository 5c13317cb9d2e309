//! The todo record held by the store and shown in the list.

use crate::backend::RemoteTodo;
use crate::constants::REMOTE_ID_MAX;
use serde::{Deserialize, Serialize};

/// A single todo as the application knows it.
///
/// `created_date` is always an ISO `YYYY-MM-DD` string, so plain string
/// comparison orders records by calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoRecord {
    pub id: i64,
    pub text: String,
    pub completed: bool,
    pub created_date: String,
}

impl TodoRecord {
    pub fn new(id: i64, text: impl Into<String>, completed: bool, created_date: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed,
            created_date: created_date.into(),
        }
    }

    /// Build a record from a service entry, stamping it with `created_date`.
    pub fn from_remote(remote: RemoteTodo, created_date: &str) -> Self {
        Self {
            id: remote.id,
            text: remote.todo,
            completed: remote.completed,
            created_date: created_date.to_string(),
        }
    }

    /// Whether the remote service can delete this record.
    pub fn is_remote(&self) -> bool {
        is_remote_id(self.id)
    }
}

/// Ids up to and including `REMOTE_ID_MAX` belong to the service; anything above is local-only.
pub fn is_remote_id(id: i64) -> bool {
    id <= REMOTE_ID_MAX
}
