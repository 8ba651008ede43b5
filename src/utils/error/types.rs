//! Error types for the catalog service

use thiserror::Error;

/// Result type alias for the catalog service
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Main error type for the catalog service
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database errors
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Conflict errors
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Bad request errors
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// File storage errors
    #[error("File storage error: {0}")]
    FileStorage(String),

    /// External service errors
    #[error("External service error: {0}")]
    External(String),

    /// Parsing errors
    #[error("Parsing error: {0}")]
    Parsing(String),

    /// Timeout errors
    #[error("Timeout error: {0}")]
    Timeout(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}
