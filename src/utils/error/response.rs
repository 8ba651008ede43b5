//! HTTP response handling for errors

use super::types::CatalogError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use tracing::error;

impl ResponseError for CatalogError {
    fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::Validation(_)
            | CatalogError::BadRequest(_)
            | CatalogError::Parsing(_) => StatusCode::BAD_REQUEST,
            CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
            CatalogError::Conflict(_) => StatusCode::CONFLICT,
            CatalogError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            CatalogError::External(_) | CatalogError::HttpClient(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error_code = match self {
            CatalogError::Config(_) => "CONFIG_ERROR",
            CatalogError::Database(_) => "DATABASE_ERROR",
            CatalogError::HttpClient(_) => "HTTP_CLIENT_ERROR",
            CatalogError::Serialization(_) => "SERIALIZATION_ERROR",
            CatalogError::Yaml(_) => "YAML_ERROR",
            CatalogError::Io(_) => "IO_ERROR",
            CatalogError::Validation(_) => "VALIDATION_ERROR",
            CatalogError::NotFound(_) => "NOT_FOUND",
            CatalogError::Conflict(_) => "CONFLICT",
            CatalogError::BadRequest(_) => "BAD_REQUEST",
            CatalogError::FileStorage(_) => "FILE_STORAGE_ERROR",
            CatalogError::External(_) => "EXTERNAL_ERROR",
            CatalogError::Parsing(_) => "PARSING_ERROR",
            CatalogError::Timeout(_) => "TIMEOUT",
            CatalogError::Internal(_) => "INTERNAL_ERROR",
        };

        if !self.is_client_error() {
            error!(code = error_code, "Request failed: {}", self);
        }

        // Server-side failures echo the underlying message so operators can
        // diagnose them from the UI.
        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: error_code.to_string(),
                message: self.to_string(),
                timestamp: chrono::Utc::now().timestamp(),
            },
        };

        HttpResponse::build(self.status_code()).json(error_response)
    }
}

/// Standard error response format
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub timestamp: i64,
}
