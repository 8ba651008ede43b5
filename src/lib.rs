//! # resale-catalog
//!
//! Product cataloging backend for secondhand goods. Staff upload batches of
//! product photos named `<managementNumber>_<suffix>.<ext>`; the service
//! groups them into product records, runs each product through a vision
//! model to draft listing content, and exposes the results for review.
//!
//! ## Embedding the server
//!
//! ```rust,no_run
//! use resale_catalog::{Config, server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/catalog.yaml").await?;
//!     server::run_server(config).await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::batch::{BatchOrchestrator, BatchRunner, ItemOutcome, RunSummary};
pub use core::models::{AnalysisResult, Product, ProductGroup, Rank, WorkProcess};
pub use core::vision::{ImageAnalyzer, VisionClient};
pub use storage::StorageLayer;
pub use utils::error::{CatalogError, Result};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
