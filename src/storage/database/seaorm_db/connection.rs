use crate::config::DatabaseConfig;
use crate::utils::error::{CatalogError, Result};
use sea_orm::*;
use sea_orm_migration::MigratorTrait;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::super::entities;
use super::super::migration::Migrator;
use super::types::{DatabaseBackendType, DatabaseStats, SeaOrmDatabase};

impl SeaOrmDatabase {
    /// Create a new database connection
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let backend_type = if config.is_sqlite() {
            Self::ensure_sqlite_parent(&config.url)?;
            DatabaseBackendType::SQLite
        } else {
            DatabaseBackendType::PostgreSQL
        };

        let db = Self::try_connect(&config.url, config).await?;
        info!("Database connection established ({:?})", backend_type);
        Ok(Self { db, backend_type })
    }

    /// Try to connect to a database
    async fn try_connect(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url.to_string());
        opt.max_connections(config.max_connections)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.connection_timeout))
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(3600))
            .sqlx_logging(true)
            .sqlx_logging_level(log::LevelFilter::Debug);

        Database::connect(opt).await.map_err(CatalogError::Database)
    }

    /// Create the directory holding a file-backed SQLite database
    fn ensure_sqlite_parent(url: &str) -> Result<()> {
        let Some(path) = sqlite_file_path(url) else {
            return Ok(());
        };

        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    CatalogError::Internal(format!("Failed to create data directory: {}", e))
                })?;
                debug!("Created SQLite data directory {}", parent.display());
            }
        }
        Ok(())
    }

    /// Get the current backend type
    pub fn backend_type(&self) -> DatabaseBackendType {
        self.backend_type
    }

    /// Run database migrations
    pub async fn migrate(&self) -> Result<()> {
        info!("Running database migrations...");
        Migrator::up(&self.db, None).await.map_err(|e| {
            warn!("Migration failed: {}", e);
            CatalogError::Database(e)
        })?;
        info!("Database migrations completed successfully");
        Ok(())
    }

    /// Get the underlying database connection
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Health check
    pub async fn health_check(&self) -> Result<()> {
        debug!("Performing database health check");

        let _result = entities::User::find()
            .limit(1)
            .all(&self.db)
            .await
            .map_err(CatalogError::Database)?;

        debug!("Database health check passed");
        Ok(())
    }

    /// Row counts per table
    pub async fn stats(&self) -> Result<DatabaseStats> {
        Ok(DatabaseStats {
            products: entities::Product::find().count(&self.db).await?,
            work_processes: entities::WorkProcess::find().count(&self.db).await?,
            workers: entities::User::find().count(&self.db).await?,
            folders: entities::Folder::find().count(&self.db).await?,
            categories: entities::Category::find().count(&self.db).await?,
        })
    }
}

/// File path part of a SQLite URL, `None` for in-memory databases
fn sqlite_file_path(url: &str) -> Option<&str> {
    let rest = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();

    if path.is_empty() || path == ":memory:" {
        None
    } else {
        Some(path)
    }
}
