//! Remote todo service abstraction.
//!
//! This module defines the interface the command handlers use to talk to the
//! remote todo API, along with the wire types and error handling. The
//! concrete HTTP implementation lives in [`dummyjson`]; tests substitute their
//! own implementation of [`TodoBackend`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod dummyjson;
pub mod factory;

pub use dummyjson::DummyJsonBackend;
pub use factory::create_backend;

/// Common error types for backend operations.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The request never produced an HTTP response.
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered with a non-success status.
    #[error("API error: HTTP {status}: {body}")]
    Api { status: u16, body: String },

    /// The response body did not match the expected shape.
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// A todo entry as the remote service returns it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteTodo {
    pub id: i64,
    pub todo: String,
    pub completed: bool,
    #[serde(rename = "userId")]
    pub user_id: i64,
}

/// Envelope of the list endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TodoListResponse {
    pub todos: Vec<RemoteTodo>,
    #[serde(default)]
    pub total: Option<u32>,
}

/// Arguments for creating a new todo.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreateTodoArgs {
    pub todo: String,
    pub completed: bool,
    #[serde(rename = "userId")]
    pub user_id: i64,
}

/// Interface to the remote todo service.
///
/// Every method fails with [`BackendError::Network`] when the transport fails
/// and with [`BackendError::Api`] on a non-2xx status.
#[async_trait]
pub trait TodoBackend: Send + Sync {
    /// Returns the backend type identifier (e.g., "dummyjson").
    fn backend_type(&self) -> &str;

    /// Up to `limit` todos in service order.
    async fn fetch_todos(&self, limit: u32) -> Result<Vec<RemoteTodo>, BackendError>;

    /// Create a todo. The echoed id is not durable and must not be used for deletes.
    async fn create_todo(&self, args: CreateTodoArgs) -> Result<RemoteTodo, BackendError>;

    /// Delete a service-side todo by id.
    async fn delete_todo(&self, id: i64) -> Result<(), BackendError>;
}
