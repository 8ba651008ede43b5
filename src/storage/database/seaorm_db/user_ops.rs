use crate::core::models::Worker;
use crate::utils::error::{CatalogError, Result};
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, user};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// List workers by name
    pub async fn list_workers(&self) -> Result<Vec<Worker>> {
        let models = entities::User::find()
            .order_by_asc(user::Column::Name)
            .all(&self.db)
            .await
            .map_err(CatalogError::Database)?;

        Ok(models.iter().map(user::Model::to_domain).collect())
    }

    /// Find worker by ID
    pub async fn get_worker(&self, id: i32) -> Result<Worker> {
        debug!("Finding worker by ID: {}", id);

        entities::User::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(CatalogError::Database)?
            .map(|model| model.to_domain())
            .ok_or_else(|| CatalogError::NotFound(format!("Worker not found: {}", id)))
    }

    /// Find worker by name
    pub async fn find_worker_by_name(&self, name: &str) -> Result<Option<Worker>> {
        let model = entities::User::find()
            .filter(user::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(CatalogError::Database)?;

        Ok(model.map(|model| model.to_domain()))
    }

    /// Create a worker with a unique, non-blank name
    pub async fn create_worker(&self, name: &str) -> Result<Worker> {
        let name = Self::worker_name(name)?;
        debug!("Creating worker: {}", name);

        if self.find_worker_by_name(name).await?.is_some() {
            return Err(CatalogError::Conflict(format!(
                "Worker name already exists: {}",
                name
            )));
        }

        let now = chrono::Utc::now().fixed_offset();
        let active_model = user::ActiveModel {
            name: Set(name.to_string()),
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

    /// Rename a worker
    pub async fn rename_worker(&self, id: i32, name: &str) -> Result<Worker> {
        let name = Self::worker_name(name)?;
        debug!("Renaming worker {} to {}", id, name);

        let model = entities::User::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(CatalogError::Database)?
            .ok_or_else(|| CatalogError::NotFound(format!("Worker not found: {}", id)))?;

        if let Some(existing) = self.find_worker_by_name(name).await? {
            if existing.id != id {
                return Err(CatalogError::Conflict(format!(
                    "Worker name already exists: {}",
                    name
                )));
            }
        }

        let mut active_model: user::ActiveModel = model.into();
        active_model.name = Set(name.to_string());
        active_model.updated_at = Set(chrono::Utc::now().fixed_offset());

        let model = active_model
            .update(&self.db)
            .await
            .map_err(CatalogError::Database)?;

        Ok(model.to_domain())
    }

    /// Delete a worker
    pub async fn delete_worker(&self, id: i32) -> Result<()> {
        debug!("Deleting worker: {}", id);

        let result = entities::User::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(CatalogError::Database)?;

        if result.rows_affected == 0 {
            return Err(CatalogError::NotFound(format!("Worker not found: {}", id)));
        }
        Ok(())
    }

    fn worker_name(name: &str) -> Result<&str> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CatalogError::Validation("Worker name is required".to_string()));
        }
        Ok(name)
    }
}
