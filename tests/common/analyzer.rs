//! Scripted image analyzer
//!
//! Returns canned results per management number and records every call.

use async_trait::async_trait;
use resale_catalog::core::models::{AnalysisResult, Rank};
use resale_catalog::core::vision::ImageAnalyzer;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct ScriptedAnalyzer {
    results: HashMap<String, AnalysisResult>,
    calls: Mutex<Vec<(String, Vec<String>)>>,
}

impl ScriptedAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Result returned for one management number; others get the fallback
    pub fn with_result(mut self, management_number: &str, result: AnalysisResult) -> Self {
        self.results.insert(management_number.to_string(), result);
        self
    }

    /// Management numbers analyzed so far, in call order
    pub fn analyzed(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(id, _)| id.clone())
            .collect()
    }

    /// Filenames passed for one management number
    pub fn filenames_for(&self, management_number: &str) -> Option<Vec<String>> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .find(|(id, _)| id == management_number)
            .map(|(_, files)| files.clone())
    }
}

#[async_trait]
impl ImageAnalyzer for ScriptedAnalyzer {
    async fn analyze(&self, product_id: &str, filenames: &[String]) -> AnalysisResult {
        self.calls
            .lock()
            .unwrap()
            .push((product_id.to_string(), filenames.to_vec()));

        self.results
            .get(product_id)
            .cloned()
            .unwrap_or_else(AnalysisResult::fallback)
    }
}

/// A complete, non-degraded analysis with two candidate titles
pub fn sample_analysis(title: &str) -> AnalysisResult {
    AnalysisResult {
        titles: vec![title.to_string(), format!("{} (alt)", title)],
        category: "Coats".to_string(),
        level: Rank::A,
        measurement: "Length 98cm / Chest 52cm".to_string(),
        measurement_type: None,
        condition: "Excellent".to_string(),
        shop1: "Mercari".to_string(),
        shop2: "Rakuma".to_string(),
        shop3: String::new(),
        degraded: false,
    }
}
