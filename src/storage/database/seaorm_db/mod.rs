// Module declarations
mod category_ops;
mod connection;
mod folder_ops;
mod product_ops;
mod types;
mod user_ops;
mod work_process_ops;


// Re-export public types
pub use types::{DatabaseBackendType, DatabaseStats, SeaOrmDatabase};
