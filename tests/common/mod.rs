#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;
use todoboard::backend::{BackendError, CreateTodoArgs, RemoteTodo, TodoBackend};
use todoboard::config::Config;
use todoboard::service::TodoService;
use todoboard::ui::core::AppContext;
use todoboard::ui::AppComponent;
use todoboard::utils::date::{Clock, FixedClock};
use todoboard::utils::ids::SequentialIds;

/// A backend call as the mock saw it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Fetch(u32),
    Create(CreateTodoArgs),
    Delete(i64),
}

#[derive(Default)]
struct MockState {
    todos: Vec<RemoteTodo>,
    calls: Vec<Call>,
    fail_fetch: bool,
    fail_create: bool,
    fail_delete: bool,
}

/// In-memory stand-in for the remote todo service.
///
/// Creates echo the submitted fields with id 255, the way the real service
/// does. Creates can be held back until `release_creates` is called.
#[derive(Default)]
pub struct MockBackend {
    state: Mutex<MockState>,
    create_gate: Option<Arc<Notify>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_todos(todos: Vec<RemoteTodo>) -> Self {
        let backend = Self::new();
        backend.state.lock().unwrap().todos = todos;
        backend
    }

    /// Hold every create until `release_creates` is called
    pub fn gated_creates(mut self) -> Self {
        self.create_gate = Some(Arc::new(Notify::new()));
        self
    }

    pub fn release_creates(&self) {
        if let Some(gate) = &self.create_gate {
            gate.notify_one();
        }
    }

    pub fn fail_fetch(self) -> Self {
        self.state.lock().unwrap().fail_fetch = true;
        self
    }

    pub fn fail_create(self) -> Self {
        self.state.lock().unwrap().fail_create = true;
        self
    }

    pub fn fail_delete(self) -> Self {
        self.state.lock().unwrap().fail_delete = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn delete_calls(&self) -> Vec<i64> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Delete(id) => Some(id),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.state.lock().unwrap().calls.push(call);
    }
}

#[async_trait]
impl TodoBackend for MockBackend {
    fn backend_type(&self) -> &str {
        "mock"
    }

    async fn fetch_todos(&self, limit: u32) -> Result<Vec<RemoteTodo>, BackendError> {
        self.record(Call::Fetch(limit));
        let state = self.state.lock().unwrap();
        if state.fail_fetch {
            return Err(BackendError::Network("connection refused".to_string()));
        }
        Ok(state.todos.iter().take(limit as usize).cloned().collect())
    }

    async fn create_todo(&self, args: CreateTodoArgs) -> Result<RemoteTodo, BackendError> {
        self.record(Call::Create(args.clone()));
        if let Some(gate) = &self.create_gate {
            gate.notified().await;
        }
        if self.state.lock().unwrap().fail_create {
            return Err(BackendError::Api {
                status: 500,
                body: "boom".to_string(),
            });
        }
        Ok(RemoteTodo {
            id: 255,
            todo: args.todo,
            completed: args.completed,
            user_id: args.user_id,
        })
    }

    async fn delete_todo(&self, id: i64) -> Result<(), BackendError> {
        self.record(Call::Delete(id));
        if self.state.lock().unwrap().fail_delete {
            return Err(BackendError::Api {
                status: 404,
                body: format!("Todo with id '{}' not found", id),
            });
        }
        Ok(())
    }
}

/// `count` service todos with ids 1..=count and texts "Todo 1".."Todo n"
pub fn remote_todos(count: i64) -> Vec<RemoteTodo> {
    (1..=count)
        .map(|id| RemoteTodo {
            id,
            todo: format!("Todo {}", id),
            completed: id % 3 == 0,
            user_id: 1,
        })
        .collect()
}

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

/// App wired to `backend`, pinned to 2024-01-01, with local ids counting up from 1000
pub fn app_with(backend: Arc<MockBackend>) -> AppComponent {
    let clock: Arc<dyn Clock> = Arc::new(FixedClock(today()));
    let service = TodoService::new(backend, clock.clone());
    let context = AppContext::new(service, clock, Config::default()).with_id_source(Box::new(SequentialIds::default()));
    AppComponent::new(context)
}

/// App after a completed initial load of `count` todos
pub async fn loaded_app(count: i64) -> (AppComponent, Arc<MockBackend>) {
    let backend = Arc::new(MockBackend::with_todos(remote_todos(count)));
    let mut app = app_with(backend.clone());
    app.handle_app_action(todoboard::ui::core::Action::InitialLoad);
    app.run_until_idle().await;
    (app, backend)
}
