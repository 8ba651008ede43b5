use crate::core::models::Folder;
use crate::utils::error::{CatalogError, Result};
use sea_orm::sea_query::Expr;
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, folder};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// List folders, newest first, optionally for one worker
    pub async fn list_folders(&self, worker_id: Option<i32>) -> Result<Vec<Folder>> {
        let mut query = entities::Folder::find();
        if let Some(worker_id) = worker_id {
            query = query.filter(folder::Column::WorkerId.eq(worker_id));
        }

        let models = query
            .order_by_desc(folder::Column::CreatedAt)
            .order_by_desc(folder::Column::Id)
            .all(&self.db)
            .await
            .map_err(CatalogError::Database)?;

        Ok(models.iter().map(folder::Model::to_domain).collect())
    }

    pub async fn get_folder(&self, id: i32) -> Result<Folder> {
        entities::Folder::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(CatalogError::Database)?
            .map(|model| model.to_domain())
            .ok_or_else(|| CatalogError::NotFound(format!("Folder not found: {}", id)))
    }

    pub async fn create_folder(&self, name: &str, worker_id: Option<i32>) -> Result<Folder> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CatalogError::Validation("Folder name is required".to_string()));
        }
        debug!("Creating folder: {}", name);

        let now = chrono::Utc::now().fixed_offset();
        let active_model = folder::ActiveModel {
            name: Set(name.to_string()),
            worker_id: Set(worker_id),
            product_count: Set(0),
            export_filename: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(CatalogError::Database)?;

        Ok(model.to_domain())
    }

    /// Add to the denormalized product count
    pub async fn add_folder_products(&self, id: i32, count: i32) -> Result<()> {
        let result = entities::Folder::update_many()
            .col_expr(
                folder::Column::ProductCount,
                Expr::col(folder::Column::ProductCount).add(count),
            )
            .col_expr(
                folder::Column::UpdatedAt,
                Expr::value(chrono::Utc::now().fixed_offset()),
            )
            .filter(folder::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(CatalogError::Database)?;

        if result.rows_affected == 0 {
            return Err(CatalogError::NotFound(format!("Folder not found: {}", id)));
        }
        Ok(())
    }

    pub async fn set_folder_export_filename(&self, id: i32, filename: &str) -> Result<Folder> {
        let model = entities::Folder::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(CatalogError::Database)?
            .ok_or_else(|| CatalogError::NotFound(format!("Folder not found: {}", id)))?;

        let mut active_model: folder::ActiveModel = model.into();
        active_model.export_filename = Set(Some(filename.to_string()));
        active_model.updated_at = Set(chrono::Utc::now().fixed_offset());

        let model = active_model
            .update(&self.db)
            .await
            .map_err(CatalogError::Database)?;

        Ok(model.to_domain())
    }

    /// Delete the folder row only
    pub async fn delete_folder(&self, id: i32) -> Result<()> {
        debug!("Deleting folder: {}", id);

        let result = entities::Folder::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(CatalogError::Database)?;

        if result.rows_affected == 0 {
            return Err(CatalogError::NotFound(format!("Folder not found: {}", id)));
        }
        Ok(())
    }
}
