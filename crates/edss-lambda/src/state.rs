use std::sync::Arc;

use crate::config::Config;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone, Default)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
