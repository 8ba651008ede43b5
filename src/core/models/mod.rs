//! Domain models shared by the storage, pipeline and HTTP layers

pub mod analysis;
pub mod category;
pub mod folder;
pub mod product;
pub mod work_process;
pub mod worker;

pub use analysis::AnalysisResult;
pub use category::{CategoryOptions, CategoryRow, CATEGORY_DEPTH};
pub use folder::Folder;
pub use product::{
    Product, ProductFilter, ProductGroup, ProductPage, ProductUpdate, Rank, SizeConversion,
};
pub use work_process::WorkProcess;
pub use worker::Worker;
