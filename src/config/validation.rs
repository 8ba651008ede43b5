//! Configuration validation
//!
//! Each configuration section implements `validate` returning a plain message;
//! the `Validate` trait lets callers treat sections uniformly and tags errors
//! with the section they came from.

use super::models::*;
use crate::utils::error::{CatalogError, Result};

/// Trait for validating configuration sections
pub trait Validate {
    /// Section name used in error messages
    fn section(&self) -> &'static str;

    /// Check the section, returning a human-readable reason on failure
    fn check(&self) -> std::result::Result<(), String>;

    /// Validate and convert failures into a configuration error
    fn validate_section(&self) -> Result<()> {
        self.check()
            .map_err(|e| CatalogError::config(format!("{} config error: {}", self.section(), e)))
    }
}

impl Validate for ServerConfig {
    fn section(&self) -> &'static str {
        "Server"
    }

    fn check(&self) -> std::result::Result<(), String> {
        self.validate()
    }
}

impl Validate for CorsConfig {
    fn section(&self) -> &'static str {
        "CORS"
    }

    fn check(&self) -> std::result::Result<(), String> {
        self.validate()
    }
}

impl Validate for StorageConfig {
    fn section(&self) -> &'static str {
        "Storage"
    }

    fn check(&self) -> std::result::Result<(), String> {
        self.validate()
    }
}

impl Validate for VisionConfig {
    fn section(&self) -> &'static str {
        "Vision"
    }

    fn check(&self) -> std::result::Result<(), String> {
        self.validate()
    }
}

impl Validate for BatchConfig {
    fn section(&self) -> &'static str {
        "Batch"
    }

    fn check(&self) -> std::result::Result<(), String> {
        self.validate()
    }
}
