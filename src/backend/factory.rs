//! Backend factory for creating backend instances from configuration.

use std::sync::Arc;

use anyhow::{anyhow, Result};

use super::{dummyjson::DummyJsonBackend, TodoBackend};
use crate::config::ApiConfig;

/// Create a backend instance from the `[api]` configuration section.
///
/// # Errors
/// Returns error if the backend type is unknown.
pub fn create_backend(api: &ApiConfig) -> Result<Arc<dyn TodoBackend>> {
    match api.backend_type.as_str() {
        "dummyjson" => Ok(Arc::new(DummyJsonBackend::new(&api.base_url))),
        other => Err(anyhow!("Unknown backend type: {}", other)),
    }
}
