use super::categories::append_category_level;
use super::cleanup::{remove_images, CleanupReport};
use crate::core::models::{Folder, Product, ProductUpdate};
use crate::storage::StorageLayer;
use crate::utils::error::{CatalogError, Result};
use crate::utils::time::export_filename;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};

/// A deleted product and what happened to its images
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOutcome {
    pub product: Product,
    pub image_cleanup: CleanupReport,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkDeleteFailure {
    pub management_number: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkDeleteReport {
    /// Management numbers whose rows were removed
    pub deleted: Vec<String>,
    pub failed: Vec<BulkDeleteFailure>,
    pub image_cleanup: CleanupReport,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderDeleteOutcome {
    pub folder: Folder,
    pub products_deleted: u64,
    pub image_cleanup: CleanupReport,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateTitles {
    pub management_number: String,
    pub title: Option<String>,
    pub candidate_titles: Vec<String>,
}

/// A folder with the spreadsheet path its export will be written to
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportTarget {
    #[serde(flatten)]
    pub folder: Folder,
    pub export_path: String,
}

/// Product operations that touch both the database and image storage
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    storage: StorageLayer,
    exports_dir: PathBuf,
}

impl ProductCatalog {
    pub fn new(storage: StorageLayer, exports_dir: impl Into<PathBuf>) -> Self {
        Self {
            storage,
            exports_dir: exports_dir.into(),
        }
    }

    pub async fn get(&self, management_number: &str) -> Result<Product> {
        self.storage.db().get_latest_product(management_number).await
    }

    pub async fn update(&self, management_number: &str, update: &ProductUpdate) -> Result<Product> {
        if update.is_empty() {
            return Err(CatalogError::Validation("No fields to update".to_string()));
        }
        if let Some(title) = &update.title {
            if title.trim().is_empty() {
                return Err(CatalogError::Validation("Title cannot be blank".to_string()));
            }
        }
        self.storage
            .db()
            .update_latest_product(management_number, update)
            .await
    }

    /// Delete the latest row, then remove its images
    pub async fn delete(&self, management_number: &str) -> Result<DeleteOutcome> {
        let product = self
            .storage
            .db()
            .delete_latest_product(management_number)
            .await?;

        let image_cleanup = remove_images(self.storage.images(), &product.images).await;
        if !image_cleanup.is_clean() {
            warn!(
                management_number,
                failures = image_cleanup.failures.len(),
                "Product deleted but some images could not be removed"
            );
        }

        Ok(DeleteOutcome {
            product,
            image_cleanup,
        })
    }

    /// Delete every row for each management number
    pub async fn bulk_delete(&self, management_numbers: &[String]) -> Result<BulkDeleteReport> {
        if management_numbers.is_empty() {
            return Err(CatalogError::Validation(
                "managementNumbers must not be empty".to_string(),
            ));
        }

        let mut report = BulkDeleteReport::default();

        for management_number in management_numbers {
            match self
                .storage
                .db()
                .delete_products_by_management_number(management_number)
                .await
            {
                Ok(products) => {
                    for product in &products {
                        let cleanup = remove_images(self.storage.images(), &product.images).await;
                        report.image_cleanup.merge(cleanup);
                    }
                    report.deleted.push(management_number.clone());
                }
                Err(e) => {
                    warn!(management_number = %management_number, error = %e, "Bulk delete entry failed");
                    report.failed.push(BulkDeleteFailure {
                        management_number: management_number.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        info!(
            deleted = report.deleted.len(),
            failed = report.failed.len(),
            "Bulk delete finished"
        );
        Ok(report)
    }

    pub async fn candidate_titles(&self, management_number: &str) -> Result<CandidateTitles> {
        let product = self.get(management_number).await?;
        Ok(CandidateTitles {
            management_number: product.management_number,
            title: product.title,
            candidate_titles: product.candidate_titles,
        })
    }

    /// Choose one of the stored candidate titles
    pub async fn select_title(&self, management_number: &str, title: &str) -> Result<Product> {
        let product = self.get(management_number).await?;

        if !product.candidate_titles.iter().any(|candidate| candidate == title) {
            return Err(CatalogError::Validation(format!(
                "Title is not one of the candidate titles: {}",
                title
            )));
        }

        let update = ProductUpdate {
            title: Some(title.to_string()),
            ..ProductUpdate::default()
        };
        self.storage
            .db()
            .update_latest_product(management_number, &update)
            .await
    }

    /// Record a category choice at `level` on the latest row
    pub async fn choose_category(
        &self,
        management_number: &str,
        level: usize,
        name: &str,
    ) -> Result<Product> {
        let product = self.get(management_number).await?;
        let category_list = append_category_level(&product.category_list, level, name)?;

        let update = ProductUpdate {
            category: category_list.last().cloned(),
            category_list: Some(category_list),
            ..ProductUpdate::default()
        };
        self.storage
            .db()
            .update_latest_product(management_number, &update)
            .await
    }

    /// Delete a folder with its products and their images
    pub async fn delete_folder(&self, folder_id: i32) -> Result<FolderDeleteOutcome> {
        let database = self.storage.db();
        let folder = database.get_folder(folder_id).await?;
        let products = database.products_in_folder(folder_id).await?;

        let products_deleted = database.delete_products_in_folder(folder_id).await?;
        database.delete_folder(folder_id).await?;

        let mut image_cleanup = CleanupReport::default();
        for product in &products {
            image_cleanup.merge(remove_images(self.storage.images(), &product.images).await);
        }

        info!(folder_id, products_deleted, "Folder deleted");
        Ok(FolderDeleteOutcome {
            folder,
            products_deleted,
            image_cleanup,
        })
    }

    /// Generate and store the export filename for a folder
    pub async fn generate_export_name(&self, folder_id: i32) -> Result<ExportTarget> {
        let filename = export_filename(chrono::Utc::now());
        let folder = self
            .storage
            .db()
            .set_folder_export_filename(folder_id, &filename)
            .await?;

        let export_path = self.exports_dir.join(&filename).to_string_lossy().into_owned();
        info!(folder_id, export_path = %export_path, "Export name generated");
        Ok(ExportTarget {
            folder,
            export_path,
        })
    }
}
