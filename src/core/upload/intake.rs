use super::grouper::{SkippedFile, UploadGrouper, UploadedFile};
use crate::core::models::ProductGroup;
use crate::storage::StorageLayer;
use crate::utils::error::{CatalogError, Result};
use serde::Serialize;
use tracing::info;

/// Everything an upload request carries besides the files
#[derive(Debug, Clone, Default)]
pub struct UploadRequest {
    pub worker_id: Option<i32>,
    pub price: Option<i64>,
    pub folder_name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadSummary {
    pub total_files: usize,
    pub valid_files: usize,
    pub skipped_files: Vec<SkippedFile>,
}

/// Response of a successful upload
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadOutcome {
    pub work_process_id: i32,
    pub folder_id: Option<i32>,
    pub total_images: usize,
    pub total_products: usize,
    pub upload_summary: UploadSummary,
    pub product_groups: Vec<ProductGroup>,
}

/// Turns an upload into product rows and a pending work process
#[derive(Debug, Clone)]
pub struct UploadIntake {
    storage: StorageLayer,
    grouper: UploadGrouper,
}

impl UploadIntake {
    pub fn new(storage: StorageLayer, max_file_size: u64) -> Self {
        Self {
            storage,
            grouper: UploadGrouper::new(max_file_size),
        }
    }

    /// Group, store and register an upload
    ///
    /// Fails without creating anything when no file forms a valid group.
    pub async fn accept(&self, files: Vec<UploadedFile>, request: UploadRequest) -> Result<UploadOutcome> {
        if files.is_empty() {
            return Err(CatalogError::Validation("No files uploaded".to_string()));
        }

        let database = self.storage.db();
        if let Some(worker_id) = request.worker_id {
            database.get_worker(worker_id).await?;
        }

        let grouping = self.grouper.group_files(&files);
        if grouping.groups.is_empty() {
            return Err(CatalogError::Validation(
                "No valid images to process".to_string(),
            ));
        }

        self.grouper.write(&files, self.storage.images()).await?;

        let folder_id = match request
            .folder_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
        {
            Some(name) => Some(database.create_folder(name, request.worker_id).await?.id),
            None => None,
        };

        let products = database
            .create_products(&grouping.groups, request.price, request.worker_id, folder_id)
            .await?;

        if let Some(folder_id) = folder_id {
            database
                .add_folder_products(folder_id, products.len() as i32)
                .await?;
        }

        let product_ids: Vec<String> = grouping
            .groups
            .iter()
            .map(|group| group.management_number.clone())
            .collect();
        let work_process = database
            .create_work_process(request.worker_id, &product_ids)
            .await?;

        info!(
            run_id = work_process.id,
            products = products.len(),
            skipped = grouping.skipped.len(),
            "Upload accepted"
        );

        Ok(UploadOutcome {
            work_process_id: work_process.id,
            folder_id,
            total_images: grouping.total_images(),
            total_products: grouping.groups.len(),
            upload_summary: UploadSummary {
                total_files: files.len(),
                valid_files: files.len() - grouping.skipped.len(),
                skipped_files: grouping.skipped,
            },
            product_groups: grouping.groups,
        })
    }
}
