//! Remote todo service client used by the command handlers.
//!
//! `TodoService` wraps a [`TodoBackend`] and turns wire entries into
//! [`TodoRecord`]s. The service does not supply creation dates, so records
//! from a bulk fetch are stamped with today's date from the injected
//! [`Clock`].

use std::sync::Arc;

use crate::backend::{BackendError, CreateTodoArgs, RemoteTodo, TodoBackend};
use crate::todo::TodoRecord;
use crate::utils::date::Clock;

#[derive(Clone)]
pub struct TodoService {
    backend: Arc<dyn TodoBackend>,
    clock: Arc<dyn Clock>,
}

impl TodoService {
    pub fn new(backend: Arc<dyn TodoBackend>, clock: Arc<dyn Clock>) -> Self {
        Self { backend, clock }
    }

    pub fn backend_type(&self) -> &str {
        self.backend.backend_type()
    }

    /// Up to `limit` records in service order, each dated today.
    pub async fn fetch_all(&self, limit: u32) -> Result<Vec<TodoRecord>, BackendError> {
        let todos = self.backend.fetch_todos(limit).await?;
        let today = self.clock.today_ymd();
        log::info!("Fetched {} todos from {}", todos.len(), self.backend.backend_type());
        Ok(todos
            .into_iter()
            .map(|todo| TodoRecord::from_remote(todo, &today))
            .collect())
    }

    /// Create a todo remotely and return the service's echo.
    pub async fn create(&self, text: &str, completed: bool, user_id: i64) -> Result<RemoteTodo, BackendError> {
        let args = CreateTodoArgs {
            todo: text.to_string(),
            completed,
            user_id,
        };
        self.backend.create_todo(args).await
    }

    /// Delete a service-side todo.
    pub async fn delete(&self, id: i64) -> Result<(), BackendError> {
        self.backend.delete_todo(id).await
    }
}
