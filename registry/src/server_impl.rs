//! Main registry server implementation
//!
//! Builds the axum router over the service layer and runs the HTTP server
//! until completion or a shutdown signal.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::core::EngineerService;
use crate::error::{ServerError, ServerResult};
use crate::traits::EngineerStore;
use crate::web::handlers::api;

/// Registry HTTP server with an injected store
pub struct RegistryServer<S: EngineerStore> {
    service: Arc<EngineerService<S>>,
    bind_address: SocketAddr,
}

impl<S: EngineerStore + 'static> RegistryServer<S> {
    /// Create a new server over the given service
    pub fn new(service: Arc<EngineerService<S>>, bind_address: SocketAddr) -> Self {
        Self {
            service,
            bind_address,
        }
    }

    /// Build the axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            // Engineer CRUD
            .route("/engineers", post(api::create_engineer::<S>))
            .route("/engineers", get(api::list_engineers::<S>))
            .route("/engineers/available", get(api::list_available::<S>))
            .route("/engineers/platform/:platform", get(api::find_for_platform::<S>))
            .route("/engineers/:id", get(api::get_engineer::<S>))
            .route("/engineers/:id", patch(api::update_engineer::<S>))
            .route("/engineers/:id", delete(api::delete_engineer::<S>))
            .route("/engineers/:id/certifications", post(api::add_certification::<S>))
            // Reports
            .route("/reports/revenue", get(api::revenue_report::<S>))
            // Health check
            .route("/health", get(api::health_check))
            .layer(
                ServiceBuilder::new()
                    .layer(CorsLayer::permissive())
                    .into_inner(),
            )
            .with_state(self.service.clone())
    }

    /// Start the HTTP server and run until shutdown
    pub async fn run(&self) -> ServerResult<()> {
        let router = self.build_router();

        let listener = tokio::net::TcpListener::bind(self.bind_address)
            .await
            .map_err(|e| {
                ServerError::ServerStartup(format!("Failed to bind to {}: {}", self.bind_address, e))
            })?;

        info!("🌐 Engineer registry listening on http://{}", self.bind_address);

        tokio::select! {
            result = axum::serve(listener, router) => {
                result.map_err(|e| ServerError::ServerStartup(format!("Server error: {}", e)))?;
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Received shutdown signal");
            }
        }

        Ok(())
    }

    /// Service handle for callers that bypass HTTP
    pub fn service(&self) -> &Arc<EngineerService<S>> {
        &self.service
    }
}
