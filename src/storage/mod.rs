//! Storage layer for the casework service
//!
//! This module provides data persistence over SeaORM.

/// Database storage module
pub mod database;

use crate::config::StorageConfig;
use crate::utils::error::Result;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Main storage layer
#[derive(Debug, Clone)]
pub struct StorageLayer {
    /// Database connection pool
    pub database: Arc<database::Database>,
}

/// Storage health summary reported by `/health`
#[derive(Debug, Clone, Serialize)]
pub struct StorageHealthStatus {
    pub database: bool,
    pub overall: bool,
}

impl StorageLayer {
    /// Create a new storage layer, migrating when configured to
    pub async fn new(config: &StorageConfig) -> Result<Self> {
        info!("Initializing storage layer");

        debug!("Connecting to database");
        let database = Arc::new(database::Database::new(&config.database).await?);
        let storage = Self { database };

        if config.database.auto_migrate {
            storage.migrate().await?;
        }

        info!("Storage layer initialized successfully");
        Ok(storage)
    }

    /// Wrap an already opened database
    pub fn from_database(database: database::Database) -> Self {
        Self {
            database: Arc::new(database),
        }
    }

    /// Run database migrations
    pub async fn migrate(&self) -> Result<()> {
        self.database.migrate().await
    }

    /// Health check for all storage backends
    pub async fn health_check(&self) -> StorageHealthStatus {
        let database = match self.database.health_check().await {
            Ok(()) => true,
            Err(e) => {
                warn!("Database health check failed: {}", e);
                false
            }
        };

        StorageHealthStatus {
            database,
            overall: database,
        }
    }

    /// Get database pool
    pub fn db(&self) -> &database::Database {
        &self.database
    }
}
