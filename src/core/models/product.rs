//! Product records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse quality flag attached to a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    A,
    B,
    C,
}

impl Rank {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::A => "A",
            Rank::B => "B",
            Rank::C => "C",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rank {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Rank::A),
            "B" => Ok(Rank::B),
            "C" => Ok(Rank::C),
            other => Err(format!("Unknown rank: {}", other)),
        }
    }
}

/// Foreign size label and its Japanese equivalent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeConversion {
    pub foreign: String,
    pub japanese: String,
}

/// One product cataloging record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i32,
    pub management_number: String,
    pub images: Vec<String>,
    pub title: Option<String>,
    pub candidate_titles: Vec<String>,
    pub level: Option<Rank>,
    pub measurement: Option<String>,
    pub measurement_type: Option<SizeConversion>,
    pub condition: Option<String>,
    pub category: Option<String>,
    pub category_list: Vec<String>,
    pub shop1: Option<String>,
    pub shop2: Option<String>,
    pub shop3: Option<String>,
    pub price: Option<i64>,
    pub worker_id: Option<i32>,
    pub folder_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Whether the AI pipeline has written anything yet
    pub fn is_analyzed(&self) -> bool {
        self.level.is_some()
    }
}

/// Partial update; every field is independently optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    pub title: Option<String>,
    pub candidate_titles: Option<Vec<String>>,
    pub level: Option<Rank>,
    pub measurement: Option<String>,
    pub measurement_type: Option<SizeConversion>,
    pub condition: Option<String>,
    pub category: Option<String>,
    pub category_list: Option<Vec<String>>,
    pub shop1: Option<String>,
    pub shop2: Option<String>,
    pub shop3: Option<String>,
    pub price: Option<i64>,
    pub folder_id: Option<i32>,
}

impl ProductUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Images that belong to one management number in an upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductGroup {
    pub management_number: String,
    pub images: Vec<String>,
}

/// Listing filters
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    /// Rank / level tag
    pub rank: Option<String>,
    /// JST calendar day of creation, `YYYY-MM-DD`
    pub date: Option<String>,
    /// Worker id
    pub worker: Option<i32>,
    /// Substring of the category
    pub category: Option<String>,
    /// Exact condition code
    pub condition: Option<String>,
    /// Substring of management number or title
    pub search: Option<String>,
}

/// One page of products
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}
