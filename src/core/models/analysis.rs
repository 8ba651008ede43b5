//! Vision analysis results

use super::product::{ProductUpdate, Rank, SizeConversion};
use serde::{Deserialize, Serialize};

/// Structured output of one product analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub titles: Vec<String>,
    pub category: String,
    pub level: Rank,
    pub measurement: String,
    pub measurement_type: Option<SizeConversion>,
    pub condition: String,
    pub shop1: String,
    pub shop2: String,
    pub shop3: String,
    /// Set when this is the fallback written after a failed analysis
    #[serde(skip)]
    pub degraded: bool,
}

impl AnalysisResult {
    /// Default record used whenever analysis fails
    pub fn fallback() -> Self {
        Self {
            titles: Vec::new(),
            category: String::new(),
            level: Rank::B,
            measurement: String::new(),
            measurement_type: None,
            condition: String::new(),
            shop1: String::new(),
            shop2: String::new(),
            shop3: String::new(),
            degraded: true,
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Product fields written after analysis. Blank values leave the column unset.
    pub fn to_update(&self) -> ProductUpdate {
        ProductUpdate {
            title: self.titles.first().cloned(),
            candidate_titles: Some(self.titles.clone()),
            level: Some(self.level),
            measurement: non_blank(&self.measurement),
            measurement_type: self.measurement_type.clone(),
            condition: non_blank(&self.condition),
            category: non_blank(&self.category),
            shop1: non_blank(&self.shop1),
            shop2: non_blank(&self.shop2),
            shop3: non_blank(&self.shop3),
            ..ProductUpdate::default()
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
