//! Core UI functionality for the todoboard application.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions and focus order
//! - [`component`] - Base component trait and rendering abstraction
//! - [`context`] - Services and settings shared by the command handlers
//! - [`event_handler`] - Terminal event polling
//! - [`task_manager`] - Background network operations
//!
//! # Architecture
//!
//! 1. **Components** turn key events into [`Action`]s
//! 2. **Actions** are dispatched one at a time by the app component
//! 3. **Network work** runs on the [`TaskManager`] and reports back as another action

pub mod actions;
pub mod component;
pub mod context;
pub mod event_handler;
pub mod task_manager;

// Re-export core types for easier access from other modules
pub use actions::{Action, Focus};
pub use component::Component;
pub use context::AppContext;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{TaskId, TaskManager};
