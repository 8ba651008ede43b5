//! File storage implementation
//!
//! Product images live on the local file system under their original upload
//! filename.

mod local;

pub use local::ImageStore;
pub(crate) use local::validate_filename;
