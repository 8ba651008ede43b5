//! Top-level catalog configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Everything the catalog service needs to start
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub vision: VisionConfig,
    #[serde(default)]
    pub batch: BatchConfig,
    #[serde(default)]
    pub environment: Environment,
}

impl CatalogConfig {
    pub fn validate(&self) -> Result<(), String> {
        self.server.validate()?;
        self.server.cors.validate()?;
        self.storage.validate()?;
        self.vision.validate()?;
        self.batch.validate()?;
        Ok(())
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
    Test,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
            Environment::Test => "test",
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            "test" => Ok(Environment::Test),
            other => Err(format!("Unknown environment: {}", other)),
        }
    }
}
