//! HTTP backend for dummyjson-style todo APIs.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use super::{BackendError, CreateTodoArgs, RemoteTodo, TodoBackend, TodoListResponse};

/// Todo backend speaking JSON over HTTP(S).
///
/// `base_url` is the collection URL, e.g. `https://dummyjson.com/todos`.
#[derive(Clone, Debug)]
pub struct DummyJsonBackend {
    client: Client,
    base_url: String,
}

impl DummyJsonBackend {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn list_url(&self, limit: u32) -> String {
        format!("{}?limit={}", self.base_url, limit)
    }

    fn add_url(&self) -> String {
        format!("{}/add", self.base_url)
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

/// Map a non-success status to `BackendError::Api`, passing success through.
async fn check_status(response: Response) -> Result<Response, BackendError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(BackendError::Api {
        status: status.as_u16(),
        body,
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, BackendError> {
    response
        .json::<T>()
        .await
        .map_err(|e| BackendError::InvalidData(e.to_string()))
}

#[async_trait]
impl TodoBackend for DummyJsonBackend {
    fn backend_type(&self) -> &str {
        "dummyjson"
    }

    async fn fetch_todos(&self, limit: u32) -> Result<Vec<RemoteTodo>, BackendError> {
        let url = self.list_url(limit);
        log::debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;
        let list: TodoListResponse = decode(check_status(response).await?).await?;
        log::debug!(
            "GET {}: {} todos returned, {} available",
            url,
            list.todos.len(),
            list.total.map_or_else(|| "?".to_string(), |t| t.to_string())
        );
        Ok(list.todos)
    }

    async fn create_todo(&self, args: CreateTodoArgs) -> Result<RemoteTodo, BackendError> {
        let url = self.add_url();
        log::debug!("POST {} ({:?})", url, args.todo);
        let response = self
            .client
            .post(&url)
            .json(&args)
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;
        decode(check_status(response).await?).await
    }

    async fn delete_todo(&self, id: i64) -> Result<(), BackendError> {
        let url = self.item_url(id);
        log::debug!("DELETE {}", url);
        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;
        check_status(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_built_from_base() {
        let backend = DummyJsonBackend::new("https://dummyjson.com/todos/");
        assert_eq!(backend.base_url(), "https://dummyjson.com/todos");
        assert_eq!(backend.list_url(100), "https://dummyjson.com/todos?limit=100");
        assert_eq!(backend.add_url(), "https://dummyjson.com/todos/add");
        assert_eq!(backend.item_url(42), "https://dummyjson.com/todos/42");
    }
}
