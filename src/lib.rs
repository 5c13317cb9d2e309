//! todoboard - a terminal todo list backed by a remote todo API
//!
//! The list is fetched once at startup and then kept in memory. Creating and
//! deleting todos go through the remote service; searching, date filtering
//! and paging happen locally.
//!
//! # Modules
//!
//! * [`backend`] - Remote todo service abstraction and HTTP client
//! * [`config`] - Application configuration management
//! * [`filter`] - Search, date range and pagination
//! * [`service`] - Maps service records to local ones
//! * [`store`] - In-memory todo collection
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Date and id helpers

/// Backend abstraction layer for the remote todo service
pub mod backend;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Search, date-range filtering and pagination
pub mod filter;

/// Logging setup
pub mod logger;

/// Transient error banner state
pub mod notifier;

/// Todo operations on top of a backend
pub mod service;

/// In-memory todo collection
pub mod store;

/// The local todo record
pub mod todo;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for dates and ids
pub mod utils;

pub use todo::TodoRecord;
