//! Parsing of the model's structured output

use crate::core::models::{AnalysisResult, Rank, SizeConversion};
use crate::utils::error::{CatalogError, Result};
use serde::Deserialize;
use serde::de::IgnoredAny;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct RawAnalysis {
    #[serde(default)]
    title: Option<RawTitles>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    level: Option<String>,
    #[serde(default)]
    measurement: Option<Value>,
    #[serde(default)]
    measurement_type: Option<RawSize>,
    #[serde(default)]
    condition: Option<Value>,
    #[serde(default)]
    shop1: Option<Value>,
    #[serde(default)]
    shop2: Option<Value>,
    #[serde(default)]
    shop3: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawTitles {
    Many(Vec<String>),
    One(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawSize {
    Pair { foreign: String, japanese: String },
    Tuple(String, String),
    Other(IgnoredAny),
}

/// Remove a surrounding Markdown code fence, if any
pub fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Drop the info string (e.g. `json`) on the opening line
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

/// Parse and validate the model's JSON answer
pub fn parse_analysis(content: &str) -> Result<AnalysisResult> {
    let raw: RawAnalysis = serde_json::from_str(strip_code_fence(content))
        .map_err(|e| CatalogError::parsing(format!("Analysis is not valid JSON: {}", e)))?;

    let titles: Vec<String> = match raw.title {
        Some(RawTitles::Many(titles)) => titles,
        Some(RawTitles::One(title)) => vec![title],
        None => Vec::new(),
    }
    .into_iter()
    .map(|title| title.trim().to_string())
    .filter(|title| !title.is_empty())
    .collect();

    if titles.is_empty() {
        return Err(CatalogError::Validation("Analysis has no title".to_string()));
    }

    let category = raw.category.unwrap_or_default().trim().to_string();
    if category.is_empty() {
        return Err(CatalogError::Validation("Analysis has no category".to_string()));
    }

    let level = match raw.level.as_deref().map(str::trim) {
        Some("A") => Rank::A,
        Some("B") => Rank::B,
        Some(other) => {
            return Err(CatalogError::Validation(format!(
                "Analysis level must be A or B, got {:?}",
                other
            )));
        }
        None => return Err(CatalogError::Validation("Analysis has no level".to_string())),
    };

    let measurement_type = match raw.measurement_type {
        Some(RawSize::Pair { foreign, japanese }) | Some(RawSize::Tuple(foreign, japanese)) => {
            Some(SizeConversion { foreign, japanese })
        }
        Some(RawSize::Other(_)) | None => None,
    };

    Ok(AnalysisResult {
        titles,
        category,
        level,
        measurement: text(raw.measurement),
        measurement_type,
        condition: text(raw.condition),
        shop1: text(raw.shop1),
        shop2: text(raw.shop2),
        shop3: text(raw.shop3),
        degraded: false,
    })
}

/// Passthrough fields may come back as strings, numbers or null
fn text(value: Option<Value>) -> String {
    match value {
        Some(Value::String(s)) => s,
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}
