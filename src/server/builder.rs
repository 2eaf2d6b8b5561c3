//! Server builder and run_server function

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::services::BootstrapHead;
use crate::utils::error::{CaseworkError, Result};
use tracing::info;

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
    bootstrap: Option<BootstrapHead>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Head account to create when the database has no employees
    pub fn with_bootstrap_head(mut self, seed: BootstrapHead) -> Self {
        self.bootstrap = Some(seed);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| CaseworkError::config("Configuration is required"))?;
        config.validate()?;

        let server = HttpServer::new(&config).await?;
        if let Some(seed) = self.bootstrap {
            if let Some(head) = server.state().casework.bootstrap_head(seed).await? {
                info!("Created initial head account: {}", head.username);
            }
        }
        Ok(server)
    }
}

/// Build and run the server with the given configuration
pub async fn run_server(config: Config, bootstrap: Option<BootstrapHead>) -> Result<()> {
    info!("Starting casework server");

    let mut builder = ServerBuilder::new().with_config(config);
    if let Some(seed) = bootstrap {
        builder = builder.with_bootstrap_head(seed);
    }
    let server = builder.build().await?;

    info!(
        "Server starting at: http://{}",
        server.config().address()
    );
    info!("   GET  /health - Health check");
    info!("   POST /api/auth/login - Obtain an access token");
    info!("   GET  /api/cases - Cases visible to the caller");

    server.start().await
}
