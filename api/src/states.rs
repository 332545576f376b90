use std::sync::Arc;

use crate::config::Config;

// ============================================================================
// APPLICATION STATE - Shared data across all requests
// ============================================================================
/// Read-only after startup; cloning only bumps the `Arc` count.
#[derive(Clone)]
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
