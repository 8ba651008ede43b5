//! Catalog domain logic on top of the storage layer

pub mod batch;
pub mod catalog;
pub mod models;
pub mod upload;
pub mod vision;
