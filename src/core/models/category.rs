//! Category reference data

use serde::{Deserialize, Serialize};

/// Number of nested category levels
pub const CATEGORY_DEPTH: usize = 8;

/// One seed row: the category path from level 1 down, and the leaf code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRow {
    pub levels: Vec<String>,
    pub code: String,
}

/// Choices available below a partially selected path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryOptions {
    /// Level the options belong to
    pub level: usize,
    pub options: Vec<String>,
    /// Leaf code once the chosen path has no deeper level
    pub code: Option<String>,
}
