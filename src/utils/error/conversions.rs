//! Type conversions for CatalogError

use super::types::CatalogError;

impl From<actix_multipart::MultipartError> for CatalogError {
    fn from(err: actix_multipart::MultipartError) -> Self {
        CatalogError::BadRequest(format!("Invalid multipart data: {}", err))
    }
}

impl From<actix_web::error::JsonPayloadError> for CatalogError {
    fn from(err: actix_web::error::JsonPayloadError) -> Self {
        CatalogError::BadRequest(format!("Invalid JSON body: {}", err))
    }
}
