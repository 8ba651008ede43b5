use super::types::{ItemOutcome, RunSummary};
use crate::core::vision::ImageAnalyzer;
use crate::storage::Database;
use crate::utils::error::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Drives one work process from start to finished
#[derive(Clone)]
pub struct BatchOrchestrator {
    database: Arc<Database>,
    analyzer: Arc<dyn ImageAnalyzer>,
    item_delay: Duration,
}

impl std::fmt::Debug for BatchOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatchOrchestrator")
            .field("item_delay", &self.item_delay)
            .finish_non_exhaustive()
    }
}

impl BatchOrchestrator {
    pub fn new(database: Arc<Database>, analyzer: Arc<dyn ImageAnalyzer>, item_delay: Duration) -> Self {
        Self {
            database,
            analyzer,
            item_delay,
        }
    }

    pub fn database(&self) -> &Arc<Database> {
        &self.database
    }

    /// Process every product id of a run in order, then mark it finished
    ///
    /// Only a missing run or a failure to mark it finished is an error.
    pub async fn run(&self, run_id: i32) -> Result<RunSummary> {
        let work_process = self.database.get_work_process(run_id).await?;
        let total = work_process.product_ids.len();
        info!(run_id, total, "Batch run started");

        let mut summary = RunSummary::new(run_id, total);

        for product_id in &work_process.product_ids {
            if let Err(e) = self.database.set_current_product(run_id, product_id).await {
                warn!(run_id, product_id = %product_id, error = %e, "Failed to record current product");
            }

            let (outcome, called_analyzer) = self.process_item(product_id).await;
            match &outcome {
                ItemOutcome::Analyzed { degraded: true } => {
                    warn!(run_id, product_id = %product_id, "Product analyzed with fallback result")
                }
                ItemOutcome::Analyzed { degraded: false } => {
                    debug!(run_id, product_id = %product_id, "Product analyzed")
                }
                ItemOutcome::Skipped(reason) => {
                    info!(run_id, product_id = %product_id, reason = %reason, "Product skipped")
                }
                ItemOutcome::Failed(message) => {
                    warn!(run_id, product_id = %product_id, error = %message, "Product failed")
                }
            }
            summary.record(&outcome);

            if let Err(e) = self.database.increment_finished(run_id).await {
                warn!(run_id, product_id = %product_id, error = %e, "Failed to advance finished counter");
            }

            if called_analyzer && !self.item_delay.is_zero() {
                tokio::time::sleep(self.item_delay).await;
            }
        }

        self.database.mark_finished(run_id).await?;
        info!(
            run_id,
            analyzed = summary.analyzed,
            degraded = summary.degraded,
            skipped = summary.skipped,
            failed = summary.failed,
            "Batch run finished"
        );
        Ok(summary)
    }

    /// Returns the outcome and whether the analyzer was called
    async fn process_item(&self, product_id: &str) -> (ItemOutcome, bool) {
        let product = match self.database.find_latest_product(product_id).await {
            Ok(Some(product)) => product,
            Ok(None) => return (ItemOutcome::Skipped("Product not found".to_string()), false),
            Err(e) => return (ItemOutcome::Failed(e.to_string()), false),
        };

        if product.images.is_empty() {
            return (ItemOutcome::Skipped("Product has no images".to_string()), false);
        }

        let result = self.analyzer.analyze(product_id, &product.images).await;
        let degraded = result.is_degraded();

        match self
            .database
            .update_latest_product(product_id, &result.to_update())
            .await
        {
            Ok(_) => (ItemOutcome::Analyzed { degraded }, true),
            Err(e) => (ItemOutcome::Failed(e.to_string()), true),
        }
    }
}
