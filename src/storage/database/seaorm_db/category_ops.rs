use crate::core::models::{CategoryRow, CATEGORY_DEPTH};
use crate::utils::error::{CatalogError, Result};
use sea_orm::*;
use tracing::{debug, info};

use super::super::entities::{self, category};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    pub async fn category_count(&self) -> Result<u64> {
        entities::Category::find()
            .count(&self.db)
            .await
            .map_err(CatalogError::Database)
    }

    /// Insert reference rows
    pub async fn insert_categories(&self, rows: &[CategoryRow]) -> Result<usize> {
        if rows.is_empty() {
            return Ok(0);
        }

        let mut models = Vec::with_capacity(rows.len());
        for row in rows {
            models.push(Self::category_active_model(row)?);
        }

        let txn = self.db.begin().await.map_err(CatalogError::Database)?;
        for chunk in models.chunks(100) {
            entities::Category::insert_many(chunk.to_vec())
                .exec(&txn)
                .await
                .map_err(CatalogError::Database)?;
        }
        txn.commit().await.map_err(CatalogError::Database)?;

        info!("Inserted {} category rows", rows.len());
        Ok(rows.len())
    }

    /// Rows whose first levels equal `path`
    pub async fn categories_under(&self, path: &[String]) -> Result<Vec<CategoryRow>> {
        debug!("Finding categories under {:?}", path);

        if path.len() > CATEGORY_DEPTH {
            return Err(CatalogError::Validation(format!(
                "Category path deeper than {} levels",
                CATEGORY_DEPTH
            )));
        }

        let mut query = entities::Category::find();
        for (index, name) in path.iter().enumerate() {
            if let Some(column) = category::level_column(index + 1) {
                query = query.filter(column.eq(name.as_str()));
            }
        }

        let models = query
            .order_by_asc(category::Column::Id)
            .all(&self.db)
            .await
            .map_err(CatalogError::Database)?;

        Ok(models.iter().map(category::Model::to_domain).collect())
    }

    fn category_active_model(row: &CategoryRow) -> Result<category::ActiveModel> {
        if row.levels.is_empty() || row.levels.len() > CATEGORY_DEPTH {
            return Err(CatalogError::Validation(format!(
                "Category row must have 1 to {} levels: {:?}",
                CATEGORY_DEPTH, row.levels
            )));
        }
        if row.code.trim().is_empty() {
            return Err(CatalogError::Validation(format!(
                "Category row is missing a code: {:?}",
                row.levels
            )));
        }

        let level = |index: usize| row.levels.get(index).cloned();
        Ok(category::ActiveModel {
            level1: Set(row.levels[0].clone()),
            level2: Set(level(1)),
            level3: Set(level(2)),
            level4: Set(level(3)),
            level5: Set(level(4)),
            level6: Set(level(5)),
            level7: Set(level(6)),
            level8: Set(level(7)),
            code: Set(row.code.clone()),
            ..Default::default()
        })
    }
}
