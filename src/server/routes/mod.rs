//! HTTP route modules
//!
//! Handlers return `crate::utils::error::Result<HttpResponse>`; errors render
//! through `CatalogError`'s `ResponseError` impl.

pub mod batch;
pub mod categories;
pub mod folders;
pub mod products;
pub mod users;

use serde::{Deserialize, Serialize};

/// Confirmation body for operations without a natural record to return
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,
    pub message: String,
    /// Response data (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    /// Create a successful response carrying data
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Create a successful response with only a message
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
        }
    }
}

/// `?workerId=` filter shared by list endpoints
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerQuery {
    pub worker_id: Option<i32>,
}
