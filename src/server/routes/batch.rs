//! Batch upload and work process endpoints

use crate::core::upload::{UploadRequest, UploadedFile};
use crate::server::routes::WorkerQuery;
use crate::server::state::AppState;
use crate::utils::error::{CatalogError, Result};
use actix_multipart::{Field, Multipart};
use actix_web::{HttpResponse, web};
use chrono::{DateTime, Utc};
use futures::StreamExt;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, info};

/// Configure batch routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/batch")
            .route("/upload-directory", web::post().to(upload_directory))
            .route("/start-processing", web::post().to(start_processing))
            .route("/work-process/{id}", web::get().to(get_work_process))
            .route("/work-process/{id}/finish", web::patch().to(finish_work_process))
            .route("/work-processes/active", web::get().to(active_work_processes)),
    );
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartProcessingRequest {
    pub work_process_id: i32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartProcessingResponse {
    pub work_process_id: i32,
    pub total_products: usize,
    pub start_time: DateTime<Utc>,
}

/// POST /batch/upload-directory
///
/// Multipart form with `images` (or `files`) file parts plus optional
/// `workerId`, `price` and `folderName` text fields.
pub async fn upload_directory(
    state: web::Data<AppState>,
    mut payload: Multipart,
) -> Result<HttpResponse> {
    let mut files = Vec::new();
    let mut request = UploadRequest::default();

    while let Some(item) = payload.next().await {
        let mut field = item?;

        let field_name = match field.name() {
            Some(name) => name.to_string(),
            None => continue,
        };

        match field_name.as_str() {
            "images" | "files" => {
                let filename = field
                    .content_disposition()
                    .and_then(|cd| cd.get_filename())
                    .map(str::to_string);
                let content = read_field(&mut field).await?;
                match filename {
                    Some(filename) => files.push(UploadedFile::new(filename, content)),
                    None => debug!("Ignoring file part without a filename"),
                }
            }
            "workerId" => {
                request.worker_id = parse_text(&read_text(&mut field).await?, "workerId")?;
            }
            "price" => {
                request.price = parse_text(&read_text(&mut field).await?, "price")?;
            }
            "folderName" => {
                let name = read_text(&mut field).await?;
                let name = name.trim();
                if !name.is_empty() {
                    request.folder_name = Some(name.to_string());
                }
            }
            _ => {
                while field.next().await.is_some() {}
            }
        }
    }

    info!(files = files.len(), worker_id = ?request.worker_id, "Upload received");
    let outcome = state.intake.accept(files, request).await?;
    Ok(HttpResponse::Ok().json(outcome))
}

/// POST /batch/start-processing
pub async fn start_processing(
    state: web::Data<AppState>,
    body: web::Json<StartProcessingRequest>,
) -> Result<HttpResponse> {
    let started = state.runner.spawn(body.work_process_id).await?;

    Ok(HttpResponse::Ok().json(StartProcessingResponse {
        work_process_id: started.work_process.id,
        total_products: started.work_process.total_products(),
        start_time: Utc::now(),
    }))
}

/// GET /batch/work-process/{id}
pub async fn get_work_process(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    let work_process = state.storage.db().get_work_process(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(work_process))
}

/// PATCH /batch/work-process/{id}/finish
pub async fn finish_work_process(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    let work_process = state.storage.db().force_finish(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(work_process))
}

/// GET /batch/work-processes/active
pub async fn active_work_processes(
    state: web::Data<AppState>,
    query: web::Query<WorkerQuery>,
) -> Result<HttpResponse> {
    let runs = state
        .storage
        .db()
        .active_work_processes(query.worker_id)
        .await?;
    Ok(HttpResponse::Ok().json(runs))
}

async fn read_field(field: &mut Field) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    while let Some(chunk) = field.next().await {
        data.extend_from_slice(&chunk?);
    }
    Ok(data)
}

async fn read_text(field: &mut Field) -> Result<String> {
    let data = read_field(field).await?;
    Ok(String::from_utf8_lossy(&data).into_owned())
}

/// Blank means absent; anything else must parse
fn parse_text<T: FromStr>(value: &str, field: &str) -> Result<Option<T>> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|_| CatalogError::validation(format!("Invalid {}: {}", field, value)))
}
