//! Storage layer for the catalog service
//!
//! This module provides the relational store and the image directory.

/// Database storage module
pub mod database;
/// File storage module
pub mod files;

use crate::config::StorageConfig;
use crate::utils::error::Result;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub use database::Database;
pub use files::ImageStore;

/// Main storage layer that bundles the storage backends
#[derive(Debug, Clone)]
pub struct StorageLayer {
    /// Database connection pool
    pub database: Arc<database::Database>,
    /// Product image directory
    pub images: Arc<files::ImageStore>,
}

impl StorageLayer {
    /// Create a new storage layer and bring the schema up to date
    pub async fn new(config: &StorageConfig) -> Result<Self> {
        info!("Initializing storage layer");

        debug!("Connecting to database");
        let database = Arc::new(database::Database::new(&config.database).await?);
        database.migrate().await?;

        debug!("Initializing image storage");
        let images = Arc::new(files::ImageStore::new(&config.files.images_dir).await?);

        info!("Storage layer initialized successfully");
        Ok(Self { database, images })
    }

    /// Assemble a storage layer from already-built parts
    pub fn from_parts(database: Arc<database::Database>, images: Arc<files::ImageStore>) -> Self {
        Self { database, images }
    }

    /// Health check for all storage backends
    pub async fn health_check(&self) -> StorageHealthStatus {
        let mut status = StorageHealthStatus {
            database: false,
            images: false,
            overall: false,
        };

        match self.database.health_check().await {
            Ok(_) => status.database = true,
            Err(e) => {
                warn!("Database health check failed: {}", e);
            }
        }

        match self.images.health_check().await {
            Ok(_) => status.images = true,
            Err(e) => {
                warn!("Image storage health check failed: {}", e);
            }
        }

        status.overall = status.database && status.images;
        status
    }

    /// Get database pool
    pub fn db(&self) -> &database::Database {
        &self.database
    }

    /// Get image storage
    pub fn images(&self) -> &files::ImageStore {
        &self.images
    }
}

/// Storage health status
#[derive(Debug, Clone, Serialize)]
pub struct StorageHealthStatus {
    pub database: bool,
    pub images: bool,
    pub overall: bool,
}
