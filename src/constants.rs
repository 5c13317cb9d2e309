//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Remote service
pub const DEFAULT_API_URL: &str = "https://dummyjson.com/todos";
pub const DEFAULT_BACKEND_TYPE: &str = "dummyjson";
pub const API_URL_ENV: &str = "TODOBOARD_API_URL";
/// Number of todos requested on the initial load
pub const DEFAULT_FETCH_LIMIT: u32 = 100;
/// Upper bound accepted for `api.fetch_limit`
pub const MAX_FETCH_LIMIT: u32 = 1000;
pub const DEFAULT_USER_ID: i64 = 1;

/// Highest id the remote service can delete. Anything above it only exists locally.
pub const REMOTE_ID_MAX: i64 = 150;

/// Inclusive range for client-generated ids of locally added todos
pub const LOCAL_ID_MIN: i64 = 1000;
pub const LOCAL_ID_MAX: i64 = 100_999;

// Pagination
pub const PAGE_SIZE: usize = 10;

// Error banner
pub const DEFAULT_ERROR_DISPLAY_SECONDS: u64 = 4;
pub const MAX_ERROR_DISPLAY_SECONDS: u64 = 60;

// User-facing messages
pub const NO_TASKS_FOUND: &str = "No tasks found.";
pub const ERROR_FETCH_FAILED: &str = "Failed to fetch todos.";
pub const ERROR_ADD_FAILED: &str = "Failed to add task.";
pub const ERROR_DELETE_FAILED: &str = "Failed to delete task.";
pub const ERROR_INVALID_TASK_DATE: &str = "Invalid date, use YYYY-MM-DD.";
pub const DELETE_CONFIRMATION_PROMPT: &str = "Are you sure you want to delete this todo?";
pub const LOADING_TEXT: &str = "⟳ Loading...";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const DATE_PLACEHOLDER: &str = "YYYY-MM-DD";

// Timing
pub const DEFAULT_TICK_RATE_MS: u64 = 100;
