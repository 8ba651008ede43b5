use super::orchestrator::BatchOrchestrator;
use super::types::RunSummary;
use crate::core::models::WorkProcess;
use crate::utils::error::{CatalogError, Result};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// A run handed to the background
#[derive(Debug)]
pub struct StartedRun {
    /// Run record as it was when started
    pub work_process: WorkProcess,
    /// Resolves when the loop ends; dropping it detaches the task
    pub handle: JoinHandle<Option<RunSummary>>,
}

/// Schedules orchestrator runs on the tokio runtime
#[derive(Debug, Clone)]
pub struct BatchRunner {
    orchestrator: Arc<BatchOrchestrator>,
}

impl BatchRunner {
    pub fn new(orchestrator: Arc<BatchOrchestrator>) -> Self {
        Self { orchestrator }
    }

    pub fn orchestrator(&self) -> &BatchOrchestrator {
        &self.orchestrator
    }

    /// Start a run in the background and return immediately
    ///
    /// Runs that are already finished are rejected. Nothing prevents two
    /// loops for the same unfinished run.
    pub async fn spawn(&self, run_id: i32) -> Result<StartedRun> {
        let work_process = self.orchestrator.database().get_work_process(run_id).await?;
        if work_process.finished {
            return Err(CatalogError::Validation(format!(
                "Work process {} is already finished",
                run_id
            )));
        }

        let orchestrator = Arc::clone(&self.orchestrator);
        let handle = tokio::spawn(async move {
            match orchestrator.run(run_id).await {
                Ok(summary) => Some(summary),
                Err(e) => {
                    error!(run_id, error = %e, "Batch run aborted");
                    None
                }
            }
        });

        info!(run_id, total = work_process.product_ids.len(), "Batch run scheduled");
        Ok(StartedRun {
            work_process,
            handle,
        })
    }
}
