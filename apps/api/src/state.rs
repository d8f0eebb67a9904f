use std::sync::Arc;

use crate::config::Config;
use crate::providers::ProviderRouter;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Provider router resolved once from config; read-only thereafter, so
    /// concurrent requests share it without locking.
    pub providers: Arc<ProviderRouter>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let providers = Arc::new(ProviderRouter::from_config(&config));
        Self { config, providers }
    }
}
