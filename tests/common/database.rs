//! Test database utilities
//!
//! Each test gets an isolated in-memory SQLite database with migrations
//! applied.

use super::fixtures::Org;
use casework::config::DatabaseConfig;
use casework::services::CaseworkService;
use casework::storage::StorageLayer;
use casework::storage::database::Database;
use std::sync::Arc;

/// Test database wrapper providing isolated in-memory SQLite instances
#[derive(Debug, Clone)]
pub struct TestDatabase {
    storage: Arc<StorageLayer>,
}

impl TestDatabase {
    /// Create a new in-memory test database
    pub async fn new() -> Self {
        let db = create_test_db().await;
        Self {
            storage: Arc::new(StorageLayer::from_database(db)),
        }
    }

    /// Get reference to the underlying database
    pub fn db(&self) -> &Database {
        self.storage.db()
    }

    pub fn storage(&self) -> Arc<StorageLayer> {
        Arc::clone(&self.storage)
    }

    /// Casework service over this database
    pub fn service(&self) -> CaseworkService {
        CaseworkService::new(self.storage())
    }

    /// Seed the standard two-team organization
    pub async fn seed_org(&self) -> Org {
        Org::seed(self.db()).await
    }
}

/// Helper to create a simple test database config
pub fn test_db_config() -> DatabaseConfig {
    DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        // In-memory DB only supports 1 connection
        max_connections: 1,
        connection_timeout: 5,
        auto_migrate: true,
    }
}

/// Create a standalone migrated test database
pub async fn create_test_db() -> Database {
    let db = Database::new(&test_db_config())
        .await
        .expect("Failed to create in-memory test database");
    db.migrate().await.expect("Failed to run database migrations");
    db
}
