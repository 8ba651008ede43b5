//! Product review and reference-data operations built on the storage layer

mod categories;
mod cleanup;
mod products;

pub use categories::{append_category_level, CategoryCatalog, CategorySelections};
pub use cleanup::{CleanupFailure, CleanupReport};
pub use products::{
    BulkDeleteFailure, BulkDeleteReport, CandidateTitles, DeleteOutcome, ExportTarget,
    FolderDeleteOutcome, ProductCatalog,
};
