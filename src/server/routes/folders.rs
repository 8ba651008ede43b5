//! Folder endpoints

use crate::server::routes::{ApiResponse, WorkerQuery};
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

/// Configure folder routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/folders")
            .route("", web::get().to(list_folders))
            .route("", web::post().to(create_folder))
            .route("/{id}", web::get().to(get_folder))
            .route("/{id}", web::delete().to(delete_folder))
            .route("/{id}/export-name", web::post().to(export_name)),
    );
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFolderRequest {
    pub name: String,
    pub worker_id: Option<i32>,
}

/// GET /folders
pub async fn list_folders(
    state: web::Data<AppState>,
    query: web::Query<WorkerQuery>,
) -> Result<HttpResponse> {
    let folders = state.storage.db().list_folders(query.worker_id).await?;
    Ok(HttpResponse::Ok().json(folders))
}

/// POST /folders
pub async fn create_folder(
    state: web::Data<AppState>,
    body: web::Json<CreateFolderRequest>,
) -> Result<HttpResponse> {
    let database = state.storage.db();
    if let Some(worker_id) = body.worker_id {
        database.get_worker(worker_id).await?;
    }
    let folder = database.create_folder(&body.name, body.worker_id).await?;
    Ok(HttpResponse::Created().json(folder))
}

/// GET /folders/{id}
pub async fn get_folder(state: web::Data<AppState>, path: web::Path<i32>) -> Result<HttpResponse> {
    let folder = state.storage.db().get_folder(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(folder))
}

/// DELETE /folders/{id}
///
/// Removes the folder's products and their images as well.
pub async fn delete_folder(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    let outcome = state.products.delete_folder(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Folder deleted", outcome)))
}

/// POST /folders/{id}/export-name
pub async fn export_name(state: web::Data<AppState>, path: web::Path<i32>) -> Result<HttpResponse> {
    let target = state.products.generate_export_name(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(target))
}
