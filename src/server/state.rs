//! Application state shared across HTTP handlers

use crate::auth::AuthSystem;
use crate::config::Config;
use crate::server::middleware::AuthRateLimiter;
use crate::services::CaseworkService;
use crate::storage::StorageLayer;
use std::sync::Arc;

/// HTTP server state shared across handlers.
///
/// Every field is behind an `Arc` so that cloning into each worker is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Login and token resolution
    pub auth: Arc<AuthSystem>,
    /// Storage layer
    pub storage: Arc<StorageLayer>,
    /// Case workflows, all access-checked
    pub casework: Arc<CaseworkService>,
    /// Brute-force protection for the login endpoint
    pub login_limiter: Arc<AuthRateLimiter>,
}

impl AppState {
    /// Wire the services on top of an opened storage layer
    pub fn new(config: Config, storage: StorageLayer) -> Self {
        let storage = Arc::new(storage);
        let auth = AuthSystem::new(&config.casework.auth, Arc::clone(&storage));
        let login_limiter = AuthRateLimiter::from_config(&config.casework.auth.login_limit);

        Self {
            auth: Arc::new(auth),
            casework: Arc::new(CaseworkService::new(Arc::clone(&storage))),
            login_limiter: Arc::new(login_limiter),
            storage,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
