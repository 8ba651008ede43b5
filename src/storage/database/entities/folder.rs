use crate::core::models::Folder;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Upload folder database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "folders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,

    /// Owning worker
    pub worker_id: Option<i32>,

    /// Denormalized number of products uploaded into this folder
    pub product_count: i32,

    /// Last generated spreadsheet export name
    pub export_filename: Option<String>,

    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

/// Folder entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::WorkerId",
        to = "super::user::Column::Id"
    )]
    Worker,
    #[sea_orm(has_many = "super::product::Entity")]
    Products,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Worker.def()
    }
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_domain(&self) -> Folder {
        Folder {
            id: self.id,
            name: self.name.clone(),
            worker_id: self.worker_id,
            product_count: self.product_count,
            export_filename: self.export_filename.clone(),
            created_at: self.created_at.to_utc(),
            updated_at: self.updated_at.to_utc(),
        }
    }
}
