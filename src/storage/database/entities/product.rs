use super::decode_list;
use crate::core::models::{Product, SizeConversion};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product cataloging record for one upload event
///
/// Several rows may share a management number; lookups go through
/// `SeaOrmDatabase::latest_product_query`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Grouping key taken from the image filename prefix (not unique)
    #[sea_orm(indexed)]
    pub management_number: String,

    /// Ordered image filenames (JSON array)
    #[sea_orm(column_type = "Text")]
    pub images: String,

    pub title: Option<String>,

    /// AI-suggested titles (JSON array)
    #[sea_orm(column_type = "Text", nullable)]
    pub candidate_titles: Option<String>,

    /// Rank tag: A, B or C
    pub level: Option<String>,

    pub measurement: Option<String>,

    /// Foreign size label of the size conversion pair
    pub size_foreign: Option<String>,

    /// Japanese size label of the size conversion pair
    pub size_japanese: Option<String>,

    pub condition: Option<String>,

    pub category: Option<String>,

    /// Chosen category path (JSON array)
    #[sea_orm(column_type = "Text", nullable)]
    pub category_list: Option<String>,

    pub shop1: Option<String>,
    pub shop2: Option<String>,
    pub shop3: Option<String>,

    pub price: Option<i64>,

    pub worker_id: Option<i32>,

    pub folder_id: Option<i32>,

    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

/// Product entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::WorkerId",
        to = "super::user::Column::Id"
    )]
    Worker,
    #[sea_orm(
        belongs_to = "super::folder::Entity",
        from = "Column::FolderId",
        to = "super::folder::Column::Id"
    )]
    Folder,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Worker.def()
    }
}

impl Related<super::folder::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Folder.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert the row into the domain product
    pub fn to_domain(&self) -> Product {
        let measurement_type = match (&self.size_foreign, &self.size_japanese) {
            (Some(foreign), Some(japanese)) => Some(SizeConversion {
                foreign: foreign.clone(),
                japanese: japanese.clone(),
            }),
            _ => None,
        };

        Product {
            id: self.id,
            management_number: self.management_number.clone(),
            images: decode_list(Some(&self.images)),
            title: self.title.clone(),
            candidate_titles: decode_list(self.candidate_titles.as_deref()),
            level: self.level.as_deref().and_then(|level| level.parse().ok()),
            measurement: self.measurement.clone(),
            measurement_type,
            condition: self.condition.clone(),
            category: self.category.clone(),
            category_list: decode_list(self.category_list.as_deref()),
            shop1: self.shop1.clone(),
            shop2: self.shop2.clone(),
            shop3: self.shop3.clone(),
            price: self.price,
            worker_id: self.worker_id,
            folder_id: self.folder_id,
            created_at: self.created_at.to_utc(),
            updated_at: self.updated_at.to_utc(),
        }
    }
}
