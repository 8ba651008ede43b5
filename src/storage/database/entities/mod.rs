/// Category reference entity module
pub mod category;
/// Folder entity module
pub mod folder;
/// Product entity module
pub mod product;
/// User (worker) entity module
pub mod user;
/// Work process entity module
pub mod work_process;

pub use category::Entity as Category;
pub use folder::Entity as Folder;
pub use product::Entity as Product;
pub use user::Entity as User;
pub use work_process::Entity as WorkProcess;

use tracing::warn;

/// Encode a list column as JSON text
pub(crate) fn encode_list(values: &[String]) -> String {
    serde_json::to_string(values).unwrap_or_else(|_| "[]".to_string())
}

/// Decode a JSON text list column; malformed values read as empty
pub(crate) fn decode_list(raw: Option<&str>) -> Vec<String> {
    match raw {
        None => Vec::new(),
        Some(text) if text.trim().is_empty() => Vec::new(),
        Some(text) => serde_json::from_str(text).unwrap_or_else(|e| {
            warn!("Malformed list column {:?}: {}", text, e);
            Vec::new()
        }),
    }
}
