//! HTTP server core implementation
//!
//! This module provides the HttpServer struct and the application factory.

use crate::config::{Config, CorsConfig, ServerConfig};
use crate::server::handlers::health_check;
use crate::server::routes;
use crate::server::state::AppState;
use crate::storage::StorageLayer;
use crate::utils::error::{CatalogError, Result};
use actix_cors::Cors;
use actix_web::{
    App, HttpServer as ActixHttpServer,
    middleware::{DefaultHeaders, Logger},
    web,
};
use tracing::{info, warn};

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server, connecting storage and the vision client
    pub async fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let storage = StorageLayer::new(config.storage()).await?;
        let state = AppState::new(config.clone(), storage)?;

        Ok(Self::from_state(state))
    }

    /// Wrap already-built state
    pub fn from_state(state: AppState) -> Self {
        Self {
            config: state.config.server().clone(),
            state,
        }
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        let port = self.config.port;

        info!("Starting HTTP server on {}", bind_addr);

        let state = web::Data::new(self.state);

        let mut server = ActixHttpServer::new(move || create_app(state.clone()));
        if let Some(workers) = self.config.workers {
            server = server.workers(workers);
        }

        let server = server
            .bind(&bind_addr)
            .map_err(|e| Self::format_bind_error(e, &bind_addr, port))?
            .shutdown_timeout(30)
            .run();

        info!("HTTP server listening on {}", bind_addr);

        let handle = server.handle();
        tokio::spawn(async move {
            Self::shutdown_signal().await;
            handle.stop(true).await;
        });

        server
            .await
            .map_err(|e| CatalogError::server(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

/// Create the Actix-web application
pub fn create_app(
    state: web::Data<AppState>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let server_config = state.config.server();
    let cors = build_cors(&server_config.cors);
    let body_limit = server_config.max_body_size;

    App::new()
        .app_data(state.clone())
        .app_data(web::PayloadConfig::new(body_limit))
        .app_data(
            web::JsonConfig::default()
                .limit(body_limit)
                .error_handler(|err, _req| CatalogError::from(err).into()),
        )
        .app_data(
            web::QueryConfig::default()
                .error_handler(|err, _req| CatalogError::bad_request(err.to_string()).into()),
        )
        .app_data(
            web::PathConfig::default()
                .error_handler(|err, _req| CatalogError::bad_request(err.to_string()).into()),
        )
        .wrap(cors)
        .wrap(Logger::default())
        .wrap(DefaultHeaders::new().add(("Server", "resale-catalog")))
        .route("/health", web::get().to(health_check))
        .configure(routes::batch::configure_routes)
        .configure(routes::products::configure_routes)
        .configure(routes::categories::configure_routes)
        .configure(routes::users::configure_routes)
        .configure(routes::folders::configure_routes)
}

fn build_cors(cors_config: &CorsConfig) -> Cors {
    if !cors_config.enabled {
        return Cors::default();
    }

    let mut cors = Cors::default();
    if cors_config.allows_all_origins() {
        warn!("CORS allows any origin");
        cors = cors.allow_any_origin();
    } else {
        for origin in &cors_config.allowed_origins {
            cors = cors.allowed_origin(origin);
        }
    }

    let methods: Vec<actix_web::http::Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    if !methods.is_empty() {
        cors = cors.allowed_methods(methods);
    }

    let headers: Vec<actix_web::http::header::HeaderName> = cors_config
        .allowed_headers
        .iter()
        .filter_map(|h| h.parse().ok())
        .collect();
    if !headers.is_empty() {
        cors = cors.allowed_headers(headers);
    }

    cors = cors.max_age(cors_config.max_age as usize);

    if cors_config.allow_credentials {
        cors = cors.supports_credentials();
    }
    cors
}
