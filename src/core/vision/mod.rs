//! Vision analysis of product images
//!
//! `ImageAnalyzer` is the seam the batch pipeline depends on. `VisionClient`
//! implements it against an OpenAI-compatible chat completions endpoint.

mod client;
mod prompt;
mod response;


pub use client::VisionClient;
pub use prompt::ANALYSIS_PROMPT;
pub use response::{parse_analysis, strip_code_fence};

use crate::core::models::AnalysisResult;
use async_trait::async_trait;

/// Produces an analysis for one product's images
///
/// Implementations never fail: any error becomes `AnalysisResult::fallback()`.
#[async_trait]
pub trait ImageAnalyzer: Send + Sync {
    async fn analyze(&self, product_id: &str, filenames: &[String]) -> AnalysisResult;
}
