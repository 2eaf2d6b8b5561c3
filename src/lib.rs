//! # casework-rs
//!
//! Backend for sponsored-member casework: employees organized as
//! head / supervisor / sdw, the cases (sponsored members) they handle,
//! intervention forms, progress reports and the case closure workflow.
//!
//! Every operation that reads or changes a case goes through one
//! hierarchical access policy, see [`auth::access`].
//!
//! ## Running the server
//!
//! ```rust,no_run
//! use casework::{Config, CaseworkServer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/casework.yaml").await?;
//!     let server = CaseworkServer::new(config).await?;
//!     server.run().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Using the service directly
//!
//! ```rust,no_run
//! use casework::config::StorageConfig;
//! use casework::services::CaseworkService;
//! use casework::storage::StorageLayer;
//! use std::sync::Arc;
//!
//! # async fn example() -> casework::Result<()> {
//! let storage = Arc::new(StorageLayer::new(&StorageConfig::default()).await?);
//! let service = CaseworkService::new(storage);
//! // Without a requester every case operation answers 401
//! assert!(service.list_cases(None, None).await.is_err());
//! # Ok(())
//! # }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod core;
pub mod server;
pub mod services;
pub mod storage;
pub mod utils;

// Re-export main types
pub use auth::access::{
    AccessDecision, AccessDirectory, AccessIntent, CaseAccessGuard, CaseAccessPolicy, DenialReason,
};
pub use config::Config;
pub use core::models::{
    CaseClosure, ClosureStatus, Employee, Intervention, InterventionKind, ProgressReport, Role,
    SponsoredMember, Spu,
};
pub use services::CaseworkService;
pub use utils::error::{CaseworkError, Result};

use tracing::info;

/// The HTTP service, ready to run
pub struct CaseworkServer {
    config: Config,
    server: server::HttpServer,
}

impl CaseworkServer {
    /// Open storage and build the HTTP server
    pub async fn new(config: Config) -> Result<Self> {
        info!("Creating casework server instance");

        let server = server::HttpServer::new(&config).await?;
        Ok(Self { config, server })
    }

    /// Run until shutdown
    pub async fn run(self) -> Result<()> {
        info!("Starting casework server on {}", self.config.server().address());
        self.server.start().await
    }
}

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp (seconds since the epoch)
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: env!("BUILD_TIME"),
            git_hash: env!("GIT_HASH"),
            rust_version: env!("RUST_VERSION"),
        }
    }
}

/// Build
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
