//! Server builder and run_server function

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{CatalogError, Result};
use tracing::{info, warn};

/// Server builder for easier configuration
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| CatalogError::Config("Configuration is required".to_string()))?;

        HttpServer::new(&config).await
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the server, seed reference data and serve until shutdown
pub async fn run_server(config: Config) -> Result<()> {
    info!(environment = %config.environment(), "Starting resale catalog service");

    let server = ServerBuilder::new().with_config(config.clone()).build().await?;

    if let Some(seed_path) = config.storage().files.category_seed.as_deref() {
        match server.state().categories.seed_from_file(seed_path).await {
            Ok(inserted) => info!(inserted, "Category reference ready"),
            Err(e) => warn!(path = seed_path, error = %e, "Category seeding failed"),
        }
    }

    info!(
        "Server starting at: http://{}",
        config.server().address()
    );
    info!("API Endpoints:");
    info!("   GET  /health");
    info!("   POST /batch/upload-directory");
    info!("   POST /batch/start-processing");
    info!("   GET  /batch/work-process/{{id}}");
    info!("   GET  /products");
    info!("   GET  /categories/top-level");

    server.start().await
}
