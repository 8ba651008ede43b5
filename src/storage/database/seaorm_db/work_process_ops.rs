use crate::core::models::WorkProcess;
use crate::utils::error::{CatalogError, Result};
use sea_orm::sea_query::Expr;
use sea_orm::*;
use tracing::{debug, info};

use super::super::entities::{self, encode_list, work_process};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Create a new run with nothing processed yet
    pub async fn create_work_process(
        &self,
        worker_id: Option<i32>,
        product_ids: &[String],
    ) -> Result<WorkProcess> {
        debug!("Creating work process with {} products", product_ids.len());

        let now = chrono::Utc::now().fixed_offset();
        let active_model = work_process::ActiveModel {
            worker_id: Set(worker_id),
            product_ids: Set(encode_list(product_ids)),
            current_product_id: Set(None),
            finished_products: Set(0),
            finished: Set(false),
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

    /// Get a run by id
    pub async fn get_work_process(&self, id: i32) -> Result<WorkProcess> {
        entities::WorkProcess::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(CatalogError::Database)?
            .map(|model| model.to_domain())
            .ok_or_else(|| CatalogError::NotFound(format!("Work process not found: {}", id)))
    }

    /// Record the product about to be processed
    pub async fn set_current_product(&self, id: i32, product_id: &str) -> Result<()> {
        debug!(run_id = id, product_id, "Setting current product");

        let result = entities::WorkProcess::update_many()
            .col_expr(
                work_process::Column::CurrentProductId,
                Expr::value(Some(product_id.to_string())),
            )
            .col_expr(
                work_process::Column::UpdatedAt,
                Expr::value(chrono::Utc::now().fixed_offset()),
            )
            .filter(work_process::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(CatalogError::Database)?;

        Self::expect_row(result, id)
    }

    /// Atomically add one to the finished counter
    pub async fn increment_finished(&self, id: i32) -> Result<()> {
        debug!(run_id = id, "Incrementing finished products");

        let result = entities::WorkProcess::update_many()
            .col_expr(
                work_process::Column::FinishedProducts,
                Expr::col(work_process::Column::FinishedProducts).add(1),
            )
            .col_expr(
                work_process::Column::UpdatedAt,
                Expr::value(chrono::Utc::now().fixed_offset()),
            )
            .filter(work_process::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(CatalogError::Database)?;

        Self::expect_row(result, id)
    }

    /// Set the finished flag. Never clears it.
    pub async fn mark_finished(&self, id: i32) -> Result<WorkProcess> {
        debug!(run_id = id, "Marking work process finished");

        let result = entities::WorkProcess::update_many()
            .col_expr(work_process::Column::Finished, Expr::value(true))
            .col_expr(
                work_process::Column::UpdatedAt,
                Expr::value(chrono::Utc::now().fixed_offset()),
            )
            .filter(work_process::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(CatalogError::Database)?;

        Self::expect_row(result, id)?;
        self.get_work_process(id).await
    }

    /// Operator cancellation: set the finished flag whatever the counter says
    ///
    /// A loop already running for this id is not interrupted.
    pub async fn force_finish(&self, id: i32) -> Result<WorkProcess> {
        info!(run_id = id, "Force finishing work process");
        self.mark_finished(id).await
    }

    /// Unfinished runs for a worker, most recent first
    pub async fn active_work_processes(&self, worker_id: Option<i32>) -> Result<Vec<WorkProcess>> {
        let mut query =
            entities::WorkProcess::find().filter(work_process::Column::Finished.eq(false));

        query = match worker_id {
            Some(worker_id) => query.filter(work_process::Column::WorkerId.eq(worker_id)),
            None => query.filter(work_process::Column::WorkerId.is_null()),
        };

        let models = query
            .order_by_desc(work_process::Column::CreatedAt)
            .order_by_desc(work_process::Column::Id)
            .all(&self.db)
            .await
            .map_err(CatalogError::Database)?;

        Ok(models.iter().map(work_process::Model::to_domain).collect())
    }

    fn expect_row(result: UpdateResult, id: i32) -> Result<()> {
        if result.rows_affected == 0 {
            return Err(CatalogError::NotFound(format!(
                "Work process not found: {}",
                id
            )));
        }
        Ok(())
    }
}
