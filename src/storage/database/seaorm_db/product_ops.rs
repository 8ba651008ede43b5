use crate::core::models::{Product, ProductFilter, ProductGroup, ProductPage, ProductUpdate};
use crate::utils::error::{CatalogError, Result};
use crate::utils::time::jst_day_bounds;
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, encode_list, product};
use super::types::SeaOrmDatabase;

/// Default listing page size
pub const DEFAULT_PAGE_SIZE: u64 = 20;
/// Largest listing page size
pub const MAX_PAGE_SIZE: u64 = 100;

impl SeaOrmDatabase {
    /// Query for the most recently created row with a management number
    ///
    /// Every read, update and delete "by management number" goes through here.
    fn latest_product_query(management_number: &str) -> Select<entities::Product> {
        entities::Product::find()
            .filter(product::Column::ManagementNumber.eq(management_number))
            .order_by_desc(product::Column::CreatedAt)
            .order_by_desc(product::Column::Id)
    }

    async fn find_latest_product_model(&self, management_number: &str) -> Result<Option<product::Model>> {
        Self::latest_product_query(management_number)
            .one(&self.db)
            .await
            .map_err(CatalogError::Database)
    }

    async fn latest_product_model(&self, management_number: &str) -> Result<product::Model> {
        self.find_latest_product_model(management_number)
            .await?
            .ok_or_else(|| {
                CatalogError::NotFound(format!("Product not found: {}", management_number))
            })
    }

    /// Create one skeleton row per group, in group order
    pub async fn create_products(
        &self,
        groups: &[ProductGroup],
        price: Option<i64>,
        worker_id: Option<i32>,
        folder_id: Option<i32>,
    ) -> Result<Vec<Product>> {
        debug!("Creating {} products", groups.len());

        let mut created = Vec::with_capacity(groups.len());
        for group in groups {
            let now = chrono::Utc::now().fixed_offset();
            let active_model = product::ActiveModel {
                management_number: Set(group.management_number.clone()),
                images: Set(encode_list(&group.images)),
                title: Set(None),
                candidate_titles: Set(None),
                level: Set(None),
                measurement: Set(None),
                size_foreign: Set(None),
                size_japanese: Set(None),
                condition: Set(None),
                category: Set(None),
                category_list: Set(None),
                shop1: Set(None),
                shop2: Set(None),
                shop3: Set(None),
                price: Set(price),
                worker_id: Set(worker_id),
                folder_id: Set(folder_id),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            };

            let model = active_model
                .insert(&self.db)
                .await
                .map_err(CatalogError::Database)?;
            created.push(model.to_domain());
        }

        Ok(created)
    }

    /// Most recently created product with a management number
    pub async fn find_latest_product(&self, management_number: &str) -> Result<Option<Product>> {
        debug!("Finding latest product: {}", management_number);
        Ok(self
            .find_latest_product_model(management_number)
            .await?
            .map(|model| model.to_domain()))
    }

    /// Like `find_latest_product` but NotFound when absent
    pub async fn get_latest_product(&self, management_number: &str) -> Result<Product> {
        Ok(self.latest_product_model(management_number).await?.to_domain())
    }

    /// Apply a partial update to the latest row
    pub async fn update_latest_product(
        &self,
        management_number: &str,
        update: &ProductUpdate,
    ) -> Result<Product> {
        debug!("Updating latest product: {}", management_number);

        let model = self.latest_product_model(management_number).await?;
        let mut active_model: product::ActiveModel = model.into();

        if let Some(title) = &update.title {
            active_model.title = Set(Some(title.clone()));
        }
        if let Some(candidates) = &update.candidate_titles {
            active_model.candidate_titles = Set(Some(encode_list(candidates)));
        }
        if let Some(level) = update.level {
            active_model.level = Set(Some(level.to_string()));
        }
        if let Some(measurement) = &update.measurement {
            active_model.measurement = Set(Some(measurement.clone()));
        }
        if let Some(size) = &update.measurement_type {
            active_model.size_foreign = Set(Some(size.foreign.clone()));
            active_model.size_japanese = Set(Some(size.japanese.clone()));
        }
        if let Some(condition) = &update.condition {
            active_model.condition = Set(Some(condition.clone()));
        }
        if let Some(category) = &update.category {
            active_model.category = Set(Some(category.clone()));
        }
        if let Some(list) = &update.category_list {
            active_model.category_list = Set(Some(encode_list(list)));
        }
        if let Some(shop) = &update.shop1 {
            active_model.shop1 = Set(Some(shop.clone()));
        }
        if let Some(shop) = &update.shop2 {
            active_model.shop2 = Set(Some(shop.clone()));
        }
        if let Some(shop) = &update.shop3 {
            active_model.shop3 = Set(Some(shop.clone()));
        }
        if let Some(price) = update.price {
            active_model.price = Set(Some(price));
        }
        if let Some(folder_id) = update.folder_id {
            active_model.folder_id = Set(Some(folder_id));
        }
        active_model.updated_at = Set(chrono::Utc::now().fixed_offset());

        let model = active_model
            .update(&self.db)
            .await
            .map_err(CatalogError::Database)?;

        Ok(model.to_domain())
    }

    /// Delete the latest row, returning it
    pub async fn delete_latest_product(&self, management_number: &str) -> Result<Product> {
        debug!("Deleting latest product: {}", management_number);

        let model = self.latest_product_model(management_number).await?;
        let product = model.to_domain();

        entities::Product::delete_by_id(model.id)
            .exec(&self.db)
            .await
            .map_err(CatalogError::Database)?;

        Ok(product)
    }

    /// Delete every row sharing a management number, returning them
    pub async fn delete_products_by_management_number(
        &self,
        management_number: &str,
    ) -> Result<Vec<Product>> {
        debug!("Deleting all products: {}", management_number);

        let models = entities::Product::find()
            .filter(product::Column::ManagementNumber.eq(management_number))
            .all(&self.db)
            .await
            .map_err(CatalogError::Database)?;

        if models.is_empty() {
            return Err(CatalogError::NotFound(format!(
                "Product not found: {}",
                management_number
            )));
        }

        entities::Product::delete_many()
            .filter(product::Column::ManagementNumber.eq(management_number))
            .exec(&self.db)
            .await
            .map_err(CatalogError::Database)?;

        Ok(models.iter().map(product::Model::to_domain).collect())
    }

    /// Products uploaded into a folder
    pub async fn products_in_folder(&self, folder_id: i32) -> Result<Vec<Product>> {
        let models = entities::Product::find()
            .filter(product::Column::FolderId.eq(folder_id))
            .order_by_asc(product::Column::Id)
            .all(&self.db)
            .await
            .map_err(CatalogError::Database)?;

        Ok(models.iter().map(product::Model::to_domain).collect())
    }

    /// Delete every product in a folder
    pub async fn delete_products_in_folder(&self, folder_id: i32) -> Result<u64> {
        let result = entities::Product::delete_many()
            .filter(product::Column::FolderId.eq(folder_id))
            .exec(&self.db)
            .await
            .map_err(CatalogError::Database)?;

        Ok(result.rows_affected)
    }

    /// Paginated, filtered listing, newest first
    pub async fn list_products(
        &self,
        filter: &ProductFilter,
        page: Option<u64>,
        limit: Option<u64>,
    ) -> Result<ProductPage> {
        let page = page.unwrap_or(1).max(1);
        let limit = limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
        let in_range = (page - 1)
            .checked_mul(limit)
            .is_some_and(|offset| offset <= i64::MAX as u64);
        if !in_range {
            return Err(CatalogError::Validation(format!(
                "Page {} is out of range for limit {}",
                page, limit
            )));
        }
        debug!("Listing products page={} limit={} filter={:?}", page, limit, filter);

        let mut query = entities::Product::find();

        if let Some(rank) = non_empty(&filter.rank) {
            query = query.filter(product::Column::Level.eq(rank.to_ascii_uppercase()));
        }
        if let Some(date) = non_empty(&filter.date) {
            let (start, end) = jst_day_bounds(date)?;
            query = query
                .filter(product::Column::CreatedAt.gte(start.fixed_offset()))
                .filter(product::Column::CreatedAt.lt(end.fixed_offset()));
        }
        if let Some(worker) = filter.worker {
            query = query.filter(product::Column::WorkerId.eq(worker));
        }
        if let Some(category) = non_empty(&filter.category) {
            query = query.filter(product::Column::Category.contains(category));
        }
        if let Some(condition) = non_empty(&filter.condition) {
            query = query.filter(product::Column::Condition.eq(condition));
        }
        if let Some(search) = non_empty(&filter.search) {
            query = query.filter(
                Condition::any()
                    .add(product::Column::ManagementNumber.contains(search))
                    .add(product::Column::Title.contains(search)),
            );
        }

        let paginator = query
            .order_by_desc(product::Column::CreatedAt)
            .order_by_desc(product::Column::Id)
            .paginate(&self.db, limit);

        let total = paginator.num_items().await.map_err(CatalogError::Database)?;
        let models = paginator
            .fetch_page(page - 1)
            .await
            .map_err(CatalogError::Database)?;

        Ok(ProductPage {
            products: models.iter().map(product::Model::to_domain).collect(),
            total,
            page,
            limit,
            total_pages: total.div_ceil(limit),
        })
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}
