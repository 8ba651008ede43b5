//! HTTP route handlers

use crate::server::state::AppState;
use crate::storage::StorageHealthStatus;
use crate::storage::database::DatabaseStats;
use actix_web::{HttpResponse, web};
use serde::Serialize;
use tracing::{debug, warn};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthReport {
    status: &'static str,
    timestamp: String,
    version: &'static str,
    git_hash: &'static str,
    environment: &'static str,
    storage: StorageHealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<DatabaseStats>,
}

/// Health check endpoint handler
///
/// Responds 503 when either storage backend is unavailable.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    debug!("Health check requested");

    let storage = state.storage.health_check().await;
    let stats = if storage.database {
        match state.storage.db().stats().await {
            Ok(stats) => Some(stats),
            Err(e) => {
                warn!(error = %e, "Failed to collect database stats");
                None
            }
        }
    } else {
        None
    };

    let healthy = storage.overall;
    let report = HealthReport {
        status: if healthy { "healthy" } else { "degraded" },
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION"),
        git_hash: env!("GIT_HASH"),
        environment: state.config.environment().as_str(),
        storage,
        stats,
    };

    if healthy {
        HttpResponse::Ok().json(report)
    } else {
        HttpResponse::ServiceUnavailable().json(report)
    }
}
