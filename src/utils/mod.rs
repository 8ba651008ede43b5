//! Utility modules for the catalog service
//!
//! - **error**: error taxonomy and HTTP mapping
//! - **logging**: tracing subscriber setup
//! - **time**: JST calendar helpers for filters and export names

pub mod error;
pub mod logging;
pub mod time;

pub use error::{CatalogError, Result};
