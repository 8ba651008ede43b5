//! Best-effort image removal
//!
//! Image deletion runs after the database change has committed. Failures are
//! logged and reported next to the primary result, never propagated.

use crate::storage::ImageStore;
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanupFailure {
    pub filename: String,
    pub error: String,
}

/// What happened to the image files of deleted products
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanupReport {
    /// Files removed from storage
    pub removed: Vec<String>,
    /// Files that were already gone
    pub missing: Vec<String>,
    pub failures: Vec<CleanupFailure>,
}

impl CleanupReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn merge(&mut self, other: CleanupReport) {
        self.removed.extend(other.removed);
        self.missing.extend(other.missing);
        self.failures.extend(other.failures);
    }
}

/// Remove each file, collecting the outcome per file
pub async fn remove_images(images: &ImageStore, filenames: &[String]) -> CleanupReport {
    let mut report = CleanupReport::default();

    for filename in filenames {
        match images.delete(filename).await {
            Ok(true) => report.removed.push(filename.clone()),
            Ok(false) => report.missing.push(filename.clone()),
            Err(e) => {
                warn!(filename = %filename, error = %e, "Failed to remove product image");
                report.failures.push(CleanupFailure {
                    filename: filename.clone(),
                    error: e.to_string(),
                });
            }
        }
    }

    report
}
