//! Test database utilities
//!
//! Each test gets an isolated in-memory SQLite database.

use resale_catalog::config::DatabaseConfig;
use resale_catalog::core::models::{Product, ProductGroup};
use resale_catalog::storage::Database;
use std::sync::Arc;

/// Test database wrapper providing isolated in-memory SQLite instances
#[derive(Debug, Clone)]
pub struct TestDatabase {
    inner: Arc<Database>,
}

impl TestDatabase {
    /// Create a migrated in-memory database
    pub async fn new() -> Self {
        let db = Database::new(&test_db_config())
            .await
            .expect("Failed to create in-memory test database");

        db.migrate()
            .await
            .expect("Failed to run database migrations");

        Self {
            inner: Arc::new(db),
        }
    }

    /// Get reference to the underlying database
    pub fn db(&self) -> &Database {
        &self.inner
    }

    /// Get Arc to the underlying database
    pub fn db_arc(&self) -> Arc<Database> {
        Arc::clone(&self.inner)
    }

    /// Insert one skeleton product
    pub async fn product(&self, management_number: &str, images: &[&str]) -> Product {
        let group = ProductGroup {
            management_number: management_number.to_string(),
            images: images.iter().map(|s| s.to_string()).collect(),
        };
        self.inner
            .create_products(&[group], None, None, None)
            .await
            .expect("Failed to create product")
            .remove(0)
    }
}

/// In-memory database config; one connection keeps the database alive
pub fn test_db_config() -> DatabaseConfig {
    DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        connection_timeout: 5,
    }
}
