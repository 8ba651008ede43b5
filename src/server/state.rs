//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::batch::{BatchOrchestrator, BatchRunner};
use crate::core::catalog::{CategoryCatalog, ProductCatalog};
use crate::core::upload::UploadIntake;
use crate::core::vision::{ImageAnalyzer, VisionClient};
use crate::storage::StorageLayer;
use crate::utils::error::Result;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Every service holds `Arc`s into the same storage layer, so cloning the
/// state per worker thread is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Database and image directory
    pub storage: StorageLayer,
    /// Product review, deletion and folder operations
    pub products: ProductCatalog,
    /// Category reference lookups
    pub categories: CategoryCatalog,
    /// Upload grouping and run creation
    pub intake: UploadIntake,
    /// Background batch runs
    pub runner: BatchRunner,
}

impl AppState {
    /// Create state using the configured vision client
    pub fn new(config: Config, storage: StorageLayer) -> Result<Self> {
        let client = VisionClient::new(config.vision().clone(), storage.images.clone())?;
        Ok(Self::with_analyzer(config, storage, Arc::new(client)))
    }

    /// Create state around any analyzer implementation
    pub fn with_analyzer(
        config: Config,
        storage: StorageLayer,
        analyzer: Arc<dyn ImageAnalyzer>,
    ) -> Self {
        let orchestrator = BatchOrchestrator::new(
            storage.database.clone(),
            analyzer,
            config.batch().item_delay(),
        );

        Self {
            products: ProductCatalog::new(
                storage.clone(),
                config.storage().files.exports_dir.clone(),
            ),
            categories: CategoryCatalog::new(storage.database.clone()),
            intake: UploadIntake::new(storage.clone(), config.batch().max_file_size),
            runner: BatchRunner::new(Arc::new(orchestrator)),
            config: Arc::new(config),
            storage,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
