//! Product listing and review endpoints

use crate::core::models::{ProductFilter, ProductUpdate};
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

/// Configure product routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/products")
            .route("", web::get().to(list_products))
            .route("/bulk-delete", web::post().to(bulk_delete))
            .route("/{management_number}", web::get().to(get_product))
            .route("/{management_number}", web::put().to(update_product))
            .route("/{management_number}", web::delete().to(delete_product))
            .route(
                "/{management_number}/candidate-titles",
                web::get().to(candidate_titles),
            )
            .route("/{management_number}/select-title", web::post().to(select_title)),
    );
}

/// Query string of `GET /products`
#[derive(Debug, Default, Deserialize)]
pub struct ListProductsQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub rank: Option<String>,
    pub date: Option<String>,
    pub worker: Option<i32>,
    pub category: Option<String>,
    pub condition: Option<String>,
    pub search: Option<String>,
}

impl ListProductsQuery {
    fn filter(&self) -> ProductFilter {
        ProductFilter {
            rank: non_blank(&self.rank),
            date: non_blank(&self.date),
            worker: self.worker,
            category: non_blank(&self.category),
            condition: non_blank(&self.condition),
            search: non_blank(&self.search),
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkDeleteRequest {
    pub management_numbers: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct SelectTitleRequest {
    pub title: String,
}

/// GET /products
pub async fn list_products(
    state: web::Data<AppState>,
    query: web::Query<ListProductsQuery>,
) -> Result<HttpResponse> {
    let page = state
        .storage
        .db()
        .list_products(&query.filter(), query.page, query.limit)
        .await?;
    Ok(HttpResponse::Ok().json(page))
}

/// GET /products/{management_number}
pub async fn get_product(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let product = state.products.get(&path).await?;
    Ok(HttpResponse::Ok().json(product))
}

/// PUT /products/{management_number}
pub async fn update_product(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<ProductUpdate>,
) -> Result<HttpResponse> {
    let product = state.products.update(&path, &body).await?;
    Ok(HttpResponse::Ok().json(product))
}

/// DELETE /products/{management_number}
pub async fn delete_product(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let outcome = state.products.delete(&path).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Product deleted", outcome)))
}

/// POST /products/bulk-delete
pub async fn bulk_delete(
    state: web::Data<AppState>,
    body: web::Json<BulkDeleteRequest>,
) -> Result<HttpResponse> {
    let report = state.products.bulk_delete(&body.management_numbers).await?;
    Ok(HttpResponse::Ok().json(report))
}

/// GET /products/{management_number}/candidate-titles
pub async fn candidate_titles(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let titles = state.products.candidate_titles(&path).await?;
    Ok(HttpResponse::Ok().json(titles))
}

/// POST /products/{management_number}/select-title
pub async fn select_title(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<SelectTitleRequest>,
) -> Result<HttpResponse> {
    let product = state.products.select_title(&path, &body.title).await?;
    Ok(HttpResponse::Ok().json(product))
}
