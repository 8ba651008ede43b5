use crate::core::models::CategoryRow;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Marketplace category reference row: up to eight nested names and a leaf code
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(indexed)]
    pub level1: String,
    pub level2: Option<String>,
    pub level3: Option<String>,
    pub level4: Option<String>,
    pub level5: Option<String>,
    pub level6: Option<String>,
    pub level7: Option<String>,
    pub level8: Option<String>,

    /// Marketplace category code
    pub code: String,
}

/// Category entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Level names as a slice-friendly array, level 1 first
    pub fn levels(&self) -> [Option<&str>; 8] {
        [
            Some(self.level1.as_str()),
            self.level2.as_deref(),
            self.level3.as_deref(),
            self.level4.as_deref(),
            self.level5.as_deref(),
            self.level6.as_deref(),
            self.level7.as_deref(),
            self.level8.as_deref(),
        ]
    }

    /// Name at a 1-based level
    pub fn level(&self, level: usize) -> Option<&str> {
        if level == 0 {
            return None;
        }
        self.levels().get(level - 1).copied().flatten()
    }

    pub fn to_domain(&self) -> CategoryRow {
        CategoryRow {
            levels: self
                .levels()
                .iter()
                .map_while(|level| level.map(str::to_string))
                .collect(),
            code: self.code.clone(),
        }
    }
}

/// Column holding a 1-based level name
pub fn level_column(level: usize) -> Option<Column> {
    match level {
        1 => Some(Column::Level1),
        2 => Some(Column::Level2),
        3 => Some(Column::Level3),
        4 => Some(Column::Level4),
        5 => Some(Column::Level5),
        6 => Some(Column::Level6),
        7 => Some(Column::Level7),
        8 => Some(Column::Level8),
        _ => None,
    }
}
