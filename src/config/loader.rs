//! Environment variable overrides
//!
//! Values from the process environment win over the YAML file. The lookup is
//! injected so tests can drive overrides without touching the real
//! environment.

use super::models::*;
use crate::utils::error::{CatalogError, Result};
use std::env;
use std::str::FromStr;
use tracing::{debug, warn};

impl CatalogConfig {
    /// Apply overrides from the process environment
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides_from(|key| env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        // Server configuration
        if let Some(host) = get("HOST") {
            self.server.host = host;
        }
        if let Some(port) = get("PORT") {
            self.server.port = parse_var("PORT", &port)?;
        }
        if let Some(origins) = get("CORS_ORIGIN") {
            self.server.cors.allowed_origins = CorsConfig::parse_origins(&origins);
        }

        // Environment, with NODE_ENV accepted for existing deployments
        if let Some(environment) = get("APP_ENV").or_else(|| get("NODE_ENV")) {
            self.environment = environment
                .parse()
                .map_err(|e: String| CatalogError::Config(e))?;
        }

        // Vision configuration
        if let Some(api_key) = get("OPENAI_API_KEY") {
            self.vision.api_key = Some(api_key);
        }
        if let Some(api_base) = get("OPENAI_API_BASE") {
            self.vision.api_base = api_base;
        }
        if let Some(model) = get("VISION_MODEL") {
            self.vision.model = model;
        }

        // Storage configuration
        if let Some(url) = get("DATABASE_URL") {
            self.storage.database.url = url;
        }
        if let Some(dir) = get("IMAGES_DIR") {
            self.storage.files.images_dir = dir;
        }
        if let Some(dir) = get("EXPORTS_DIR") {
            self.storage.files.exports_dir = dir;
        }

        // Batch configuration
        if let Some(delay) = get("BATCH_ITEM_DELAY_MS") {
            self.batch.item_delay_ms = parse_var("BATCH_ITEM_DELAY_MS", &delay)?;
        }

        if self.vision.api_key().is_none() {
            warn!("OPENAI_API_KEY is not set; analysis will return fallback results");
        }

        debug!("Environment overrides applied");
        Ok(())
    }
}

fn parse_var<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| CatalogError::config(format!("Invalid {}: {}", key, e)))
}
