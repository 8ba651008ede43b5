//! Worker management endpoints

use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

/// Configure user routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .route("", web::get().to(list_users))
            .route("", web::post().to(create_user))
            .route("/{id}", web::get().to(get_user))
            .route("/{id}", web::put().to(rename_user))
            .route("/{id}", web::delete().to(delete_user)),
    );
}

#[derive(Debug, Deserialize)]
pub struct UserRequest {
    pub name: String,
}

/// GET /users
pub async fn list_users(state: web::Data<AppState>) -> Result<HttpResponse> {
    let workers = state.storage.db().list_workers().await?;
    Ok(HttpResponse::Ok().json(workers))
}

/// POST /users
pub async fn create_user(
    state: web::Data<AppState>,
    body: web::Json<UserRequest>,
) -> Result<HttpResponse> {
    let worker = state.storage.db().create_worker(&body.name).await?;
    Ok(HttpResponse::Created().json(worker))
}

/// GET /users/{id}
pub async fn get_user(state: web::Data<AppState>, path: web::Path<i32>) -> Result<HttpResponse> {
    let worker = state.storage.db().get_worker(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(worker))
}

/// PUT /users/{id}
pub async fn rename_user(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<UserRequest>,
) -> Result<HttpResponse> {
    let worker = state
        .storage
        .db()
        .rename_worker(path.into_inner(), &body.name)
        .await?;
    Ok(HttpResponse::Ok().json(worker))
}

/// DELETE /users/{id}
pub async fn delete_user(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    state.storage.db().delete_worker(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::message("User deleted")))
}
