//! Configuration management for the catalog service
//!
//! Configuration comes from an optional YAML file, then environment variable
//! overrides, then validation.

pub mod loader;
pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{CatalogError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the catalog service
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Catalog configuration
    pub catalog: CatalogConfig,
}

impl Config {
    /// Load configuration from file, then apply environment overrides
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::parse_file(path).await?;
        config.catalog.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file only
    pub async fn parse_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| CatalogError::config(format!("Failed to read config file: {}", e)))?;

        let catalog: CatalogConfig = serde_yaml::from_str(&content)
            .map_err(|e| CatalogError::config(format!("Failed to parse config: {}", e)))?;

        debug!("Configuration file parsed successfully");
        Ok(Self { catalog })
    }

    /// Load configuration from defaults and environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut catalog = CatalogConfig::default();
        catalog.apply_env_overrides()?;

        let config = Self { catalog };
        config.validate()?;
        Ok(config)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.catalog.server
    }

    /// Get storage configuration
    pub fn storage(&self) -> &StorageConfig {
        &self.catalog.storage
    }

    /// Get vision configuration
    pub fn vision(&self) -> &VisionConfig {
        &self.catalog.vision
    }

    /// Get batch configuration
    pub fn batch(&self) -> &BatchConfig {
        &self.catalog.batch
    }

    pub fn environment(&self) -> Environment {
        self.catalog.environment
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.catalog.server.validate_section()?;
        self.catalog.server.cors.validate_section()?;
        self.catalog.storage.validate_section()?;
        self.catalog.vision.validate_section()?;
        self.catalog.batch.validate_section()?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.catalog)
            .map_err(|e| CatalogError::config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
