use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Named grouping of one upload batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: i32,
    pub name: String,
    pub worker_id: Option<i32>,
    pub product_count: i32,
    pub export_filename: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
