use super::decode_list;
use crate::core::models::WorkProcess;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Batch run database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "work_processes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub worker_id: Option<i32>,

    /// Management numbers to process, in order (JSON array, immutable)
    #[sea_orm(column_type = "Text")]
    pub product_ids: String,

    pub current_product_id: Option<String>,

    /// Monotonic counter of processed products
    pub finished_products: i32,

    pub finished: bool,

    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

/// Work process entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_domain(&self) -> WorkProcess {
        WorkProcess {
            id: self.id,
            worker_id: self.worker_id,
            product_ids: decode_list(Some(&self.product_ids)),
            current_product_id: self.current_product_id.clone(),
            finished_products: self.finished_products,
            finished: self.finished,
            created_at: self.created_at.to_utc(),
            updated_at: self.updated_at.to_utc(),
        }
    }
}
