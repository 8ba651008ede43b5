//! Storage configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,
    /// File storage configuration
    #[serde(default)]
    pub files: FileStorageConfig,
}

impl StorageConfig {
    pub fn validate(&self) -> Result<(), String> {
        self.database.validate()?;
        self.files.validate()
    }
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL (`sqlite://...` or `postgres://...`)
    #[serde(default = "default_database_url")]
    pub url: String,
    /// Maximum connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
            connection_timeout: default_connection_timeout(),
        }
    }
}

impl DatabaseConfig {
    /// Whether the URL points at SQLite
    pub fn is_sqlite(&self) -> bool {
        self.url.starts_with("sqlite:")
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.url.is_empty() {
            return Err("Database URL cannot be empty".to_string());
        }

        if !self.is_sqlite()
            && !self.url.starts_with("postgresql://")
            && !self.url.starts_with("postgres://")
        {
            return Err("Only SQLite and PostgreSQL databases are supported".to_string());
        }

        if self.max_connections == 0 {
            return Err("Database max connections must be greater than 0".to_string());
        }

        if self.connection_timeout == 0 {
            return Err("Database connection timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}

/// File storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileStorageConfig {
    /// Directory uploaded product images are written to
    #[serde(default = "default_images_dir")]
    pub images_dir: String,
    /// Directory spreadsheet exports are written to
    #[serde(default = "default_exports_dir")]
    pub exports_dir: String,
    /// Optional YAML file with category reference rows, loaded into an empty table
    #[serde(default)]
    pub category_seed: Option<String>,
}

impl Default for FileStorageConfig {
    fn default() -> Self {
        Self {
            images_dir: default_images_dir(),
            exports_dir: default_exports_dir(),
            category_seed: None,
        }
    }
}

impl FileStorageConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.images_dir.trim().is_empty() {
            return Err("Images directory cannot be empty".to_string());
        }
        if self.exports_dir.trim().is_empty() {
            return Err("Exports directory cannot be empty".to_string());
        }
        Ok(())
    }
}
