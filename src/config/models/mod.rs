//! Configuration data models
//!
//! This module defines all configuration structures used throughout the service.

#![allow(missing_docs)]

pub mod batch;
pub mod catalog;
pub mod server;
pub mod storage;
pub mod vision;

pub use batch::*;
pub use catalog::*;
pub use server::*;
pub use storage::*;
pub use vision::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    3000
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    200 * 1024 * 1024 // a full photo directory in one request
}

pub fn default_database_url() -> String {
    "sqlite://data/catalog.db?mode=rwc".to_string()
}

pub fn default_max_connections() -> u32 {
    10
}

pub fn default_connection_timeout() -> u64 {
    5
}

pub fn default_images_dir() -> String {
    "uploads/images".to_string()
}

pub fn default_exports_dir() -> String {
    "exports".to_string()
}

pub fn default_vision_api_base() -> String {
    "https://api.openai.com/v1".to_string()
}

pub fn default_vision_model() -> String {
    "gpt-4o".to_string()
}

/// Default AI request timeout in seconds
pub fn default_vision_timeout() -> u64 {
    60
}

pub fn default_vision_max_tokens() -> u32 {
    2000
}

pub fn default_vision_temperature() -> f32 {
    0.2
}

/// Default pause between products in a batch run, in milliseconds
pub fn default_item_delay_ms() -> u64 {
    1000
}

/// Default per-file upload ceiling (1 MiB)
pub fn default_max_file_size() -> u64 {
    1024 * 1024
}
