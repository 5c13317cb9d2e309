use std::sync::Arc;

use crate::config::Config;
use crate::service::TodoService;
use crate::utils::date::Clock;
use crate::utils::ids::{IdSource, RandomIds};

/// Services and settings the command handlers depend on.
pub struct AppContext {
    pub service: TodoService,
    pub clock: Arc<dyn Clock>,
    pub ids: Box<dyn IdSource>,
    pub config: Config,
}

impl AppContext {
    pub fn new(service: TodoService, clock: Arc<dyn Clock>, config: Config) -> Self {
        Self {
            service,
            clock,
            ids: Box::new(RandomIds),
            config,
        }
    }

    pub fn with_id_source(mut self, ids: Box<dyn IdSource>) -> Self {
        self.ids = ids;
        self
    }
}
