//! HTTP server core implementation

use crate::config::{Config, CorsConfig, ServerConfig};
use crate::server::handlers::health_check;
use crate::server::middleware::RequestIdMiddleware;
use crate::server::routes;
use crate::server::state::AppState;
use crate::storage::StorageLayer;
use crate::utils::error::{CaseworkError, Result};
use actix_cors::Cors;
use actix_web::{App, HttpServer as ActixHttpServer, middleware::DefaultHeaders, web};
use std::time::Duration;
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;

/// How often stale login-limiter entries are dropped
const LIMITER_CLEANUP_INTERVAL: Duration = Duration::from_secs(300);

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Open storage and wire the application state
    pub async fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let storage = StorageLayer::new(&config.casework.storage).await?;
        Ok(Self::with_state(AppState::new(config.clone(), storage)))
    }

    /// Build a server around existing state
    pub fn with_state(state: AppState) -> Self {
        Self {
            config: state.config.casework.server.clone(),
            state,
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
        let server_config = &state.config.casework.server;
        let cors = Self::build_cors(&server_config.cors);

        let json_config = web::JsonConfig::default()
            .limit(server_config.max_body_size)
            .error_handler(|err, _req| CaseworkError::bad_request(err.to_string()).into());
        let query_config = web::QueryConfig::default()
            .error_handler(|err, _req| CaseworkError::bad_request(err.to_string()).into());
        let path_config = web::PathConfig::default()
            .error_handler(|err, _req| CaseworkError::bad_request(err.to_string()).into());

        App::new()
            .app_data(state)
            .app_data(json_config)
            .app_data(query_config)
            .app_data(path_config)
            .wrap(cors)
            .wrap(TracingLogger::default())
            .wrap(RequestIdMiddleware)
            .wrap(DefaultHeaders::new().add(("Server", "casework-rs")))
            .route("/health", web::get().to(health_check))
            .configure(routes::configure_routes)
    }

    fn build_cors(cors_config: &CorsConfig) -> Cors {
        let mut cors = Cors::default();
        if !cors_config.enabled {
            return cors;
        }

        if cors_config.allows_all_origins() {
            cors = cors.allow_any_origin();
            cors_config.validate().unwrap_or_else(|e| {
                warn!(error = %e, "CORS Configuration Warning");
            });
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

        let exposed: Vec<actix_web::http::header::HeaderName> = cors_config
            .expose_headers
            .iter()
            .filter_map(|h| h.parse().ok())
            .collect();
        if !exposed.is_empty() {
            cors = cors.expose_headers(exposed);
        }

        cors = cors.max_age(cors_config.max_age as usize);
        if cors_config.allow_credentials {
            cors = cors.supports_credentials();
        }
        cors
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        info!("Starting HTTP server on {}", bind_addr);

        let limiter = self.state.login_limiter.clone();
        actix_web::rt::spawn(async move {
            let mut interval = tokio::time::interval(LIMITER_CLEANUP_INTERVAL);
            loop {
                interval.tick().await;
                limiter.cleanup_old_entries();
            }
        });

        let state = web::Data::new(self.state);
        let server = ActixHttpServer::new(move || Self::create_app(state.clone()))
            .workers(self.config.worker_count())
            .client_request_timeout(Duration::from_secs(self.config.timeout))
            .bind(&bind_addr)
            .map_err(|e| {
                CaseworkError::config(format!("Failed to bind {}: {}", bind_addr, e))
            })?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| CaseworkError::internal(format!("Server error: {}", e)))?;

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
