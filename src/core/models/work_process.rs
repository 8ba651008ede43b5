//! Batch run records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One batch run over a list of management numbers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkProcess {
    pub id: i32,
    pub worker_id: Option<i32>,
    pub product_ids: Vec<String>,
    pub current_product_id: Option<String>,
    pub finished_products: i32,
    pub finished: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WorkProcess {
    pub fn total_products(&self) -> usize {
        self.product_ids.len()
    }
}
