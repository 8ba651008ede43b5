use crate::core::models::{CategoryOptions, CategoryRow, CATEGORY_DEPTH};
use crate::storage::Database;
use crate::utils::error::{CatalogError, Result};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Extend a chosen category path with the name picked at `level`
///
/// Level 1 starts a new path. Deeper levels keep the first `level - 1`
/// entries and append `name` unless it is already among them.
pub fn append_category_level(current: &[String], level: usize, name: &str) -> Result<Vec<String>> {
    if level == 0 || level > CATEGORY_DEPTH {
        return Err(CatalogError::Validation(format!(
            "Category level must be between 1 and {}",
            CATEGORY_DEPTH
        )));
    }

    let name = name.trim();
    if name.is_empty() {
        return Err(CatalogError::Validation("Category name is required".to_string()));
    }

    if level == 1 {
        return Ok(vec![name.to_string()]);
    }

    let mut list: Vec<String> = current.iter().take(level - 1).cloned().collect();
    if !list.iter().any(|existing| existing == name) {
        list.push(name.to_string());
    }
    Ok(list)
}

/// Names picked in the cascading picker: `category` is level 1,
/// `category2` .. `category8` the deeper levels
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySelections {
    pub category: Option<String>,
    pub category2: Option<String>,
    pub category3: Option<String>,
    pub category4: Option<String>,
    pub category5: Option<String>,
    pub category6: Option<String>,
    pub category7: Option<String>,
    pub category8: Option<String>,
}

impl CategorySelections {
    /// Name picked at a 1-based level
    pub fn at(&self, level: usize) -> Option<&str> {
        let value = match level {
            1 => &self.category,
            2 => &self.category2,
            3 => &self.category3,
            4 => &self.category4,
            5 => &self.category5,
            6 => &self.category6,
            7 => &self.category7,
            8 => &self.category8,
            _ => return None,
        };
        value.as_deref().map(str::trim).filter(|name| !name.is_empty())
    }

    /// The chosen path for levels `1..=level`; every level must be present
    pub fn path(&self, level: usize) -> Result<Vec<String>> {
        if level == 0 || level > CATEGORY_DEPTH {
            return Err(CatalogError::Validation(format!(
                "Category level must be between 1 and {}",
                CATEGORY_DEPTH
            )));
        }

        (1..=level)
            .map(|index| {
                self.at(index).map(str::to_string).ok_or_else(|| {
                    CatalogError::Validation(format!("Missing category selection for level {}", index))
                })
            })
            .collect()
    }
}

/// Read-only category reference lookups
#[derive(Debug, Clone)]
pub struct CategoryCatalog {
    database: Arc<Database>,
}

impl CategoryCatalog {
    pub fn new(database: Arc<Database>) -> Self {
        Self { database }
    }

    /// Distinct level-1 names, sorted
    pub async fn top_level(&self) -> Result<Vec<String>> {
        let rows = self.database.categories_under(&[]).await?;
        let names: BTreeSet<String> = rows
            .into_iter()
            .filter_map(|row| row.levels.into_iter().next())
            .collect();
        Ok(names.into_iter().collect())
    }

    /// Options for the level below `path`, plus the leaf code when `path` ends a row
    pub async fn options(&self, path: &[String]) -> Result<CategoryOptions> {
        let rows = self.database.categories_under(path).await?;
        if rows.is_empty() && !path.is_empty() {
            return Err(CatalogError::NotFound(format!(
                "Unknown category path: {}",
                path.join(" > ")
            )));
        }

        let depth = path.len();
        let options: BTreeSet<String> = rows
            .iter()
            .filter_map(|row| row.levels.get(depth).cloned())
            .collect();
        let code = rows
            .iter()
            .find(|row| row.levels.len() == depth)
            .map(|row| row.code.clone());

        debug!(depth, options = options.len(), "Category options resolved");
        Ok(CategoryOptions {
            level: depth + 1,
            options: options.into_iter().collect(),
            code,
        })
    }

    /// Leaf code of a complete path
    pub async fn resolve_code(&self, path: &[String]) -> Result<String> {
        if path.is_empty() {
            return Err(CatalogError::Validation("Category path is required".to_string()));
        }

        self.database
            .categories_under(path)
            .await?
            .into_iter()
            .find(|row| row.levels.len() == path.len())
            .map(|row| row.code)
            .ok_or_else(|| {
                CatalogError::NotFound(format!("No category code for: {}", path.join(" > ")))
            })
    }

    /// Insert rows when the reference table is still empty
    pub async fn seed(&self, rows: &[CategoryRow]) -> Result<usize> {
        if self.database.category_count().await? > 0 {
            debug!("Category table already seeded");
            return Ok(0);
        }
        self.database.insert_categories(rows).await
    }

    /// Seed from a YAML list of `{levels, code}` rows
    pub async fn seed_from_file<P: AsRef<Path>>(&self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            CatalogError::config(format!("Failed to read category seed {:?}: {}", path, e))
        })?;
        let rows: Vec<CategoryRow> = serde_yaml::from_str(&content)?;

        let inserted = self.seed(&rows).await?;
        info!("Seeded {} categories from {:?}", inserted, path);
        Ok(inserted)
    }
}
