//! Error handling for the catalog service
//!
//! This module defines all error types used throughout the service.

#![allow(missing_docs)]

mod conversions;
mod helpers;
mod response;
mod types;

pub use response::{ErrorDetail, ErrorResponse};
pub use types::{CatalogError, Result};
