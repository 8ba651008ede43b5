//! Integration tests for resale-catalog
//!
//! These tests drive the HTTP surface and the batch pipeline against an
//! in-memory database and a temporary image directory.

pub mod batch_tests;
pub mod config_tests;
pub mod review_tests;
pub mod upload_tests;
pub mod vision_tests;
