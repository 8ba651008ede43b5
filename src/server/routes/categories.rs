//! Cascading category picker endpoints

use crate::core::catalog::CategorySelections;
use crate::core::models::{CategoryOptions, Product};
use crate::server::state::AppState;
use crate::utils::error::{CatalogError, Result};
use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};

/// Configure category routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/categories")
            .route("/top-level", web::get().to(top_level))
            .route("/level/{level}", web::post().to(level_options))
            .route("/resolve", web::post().to(resolve)),
    );
}

/// Body of `POST /categories/level/{n}`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelRequest {
    #[serde(flatten)]
    pub selections: CategorySelections,
    /// Product whose category path follows the choice
    pub management_number: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelResponse {
    #[serde(flatten)]
    pub options: CategoryOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
}

#[derive(Debug, Deserialize)]
pub struct ResolveRequest {
    pub path: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    pub path: Vec<String>,
    pub code: String,
}

/// GET /categories/top-level
pub async fn top_level(state: web::Data<AppState>) -> Result<HttpResponse> {
    let options = state.categories.top_level().await?;
    Ok(HttpResponse::Ok().json(CategoryOptions {
        level: 1,
        options,
        code: None,
    }))
}

/// POST /categories/level/{n}
///
/// Lists the names under the chosen path for levels `1..=n`. With a
/// `managementNumber`, the level-n choice is also recorded on the product.
pub async fn level_options(
    state: web::Data<AppState>,
    path: web::Path<usize>,
    body: web::Json<LevelRequest>,
) -> Result<HttpResponse> {
    let level = path.into_inner();
    let chosen = body.selections.path(level)?;
    let options = state.categories.options(&chosen).await?;

    let product = match body.management_number.as_deref().map(str::trim) {
        Some(management_number) if !management_number.is_empty() => {
            let name = chosen.last().ok_or_else(|| {
                CatalogError::validation("Category selection is required")
            })?;
            Some(
                state
                    .products
                    .choose_category(management_number, level, name)
                    .await?,
            )
        }
        _ => None,
    };

    Ok(HttpResponse::Ok().json(LevelResponse { options, product }))
}

/// POST /categories/resolve
pub async fn resolve(
    state: web::Data<AppState>,
    body: web::Json<ResolveRequest>,
) -> Result<HttpResponse> {
    let path = body.into_inner().path;
    let code = state.categories.resolve_code(&path).await?;
    Ok(HttpResponse::Ok().json(ResolveResponse { path, code }))
}
