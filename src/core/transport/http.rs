//! HTTP transport implementation.
//!
//! Serves the domain routers with axum, plus a service description at `/`
//! and a store-aware health check at `/health`.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::ApiServer;
use crate::domains::real_estate::{self, COLLECTION_PATH, MEMBER_PATH};

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        self.config.address()
    }

    /// Run the HTTP transport until Ctrl-C.
    pub async fn run(self, server: ApiServer) -> TransportResult<()> {
        let addr = self.address();
        let app = build_router(server, self.config.enable_cors);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!("Ready - listening on {} (CORS {})", addr, cors_status);
        info!("  → Listings: POST {}", COLLECTION_PATH);
        info!("  → Listing:  GET/PUT/PATCH/DELETE {}", MEMBER_PATH);
        info!("  → Health:   GET /health");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("HTTP transport finished");
        Ok(())
    }
}

/// Build the full application router for `server`.
pub fn build_router(server: ApiServer, enable_cors: bool) -> Router {
    let mut app = Router::new()
        .route("/health", get(health_check))
        .route("/", get(root_handler))
        .with_state(server.clone())
        .merge(real_estate::router(server.real_estate().clone()))
        .layer(TraceLayer::new_for_http());

    if enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    app
}

/// Resolve when the process receives Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Root handler - provides API info.
async fn root_handler(State(server): State<ApiServer>) -> impl IntoResponse {
    Json(serde_json::json!({
        "name": server.name(),
        "version": server.version(),
        "store": server.store().backend(),
        "endpoints": {
            "create": format!("POST {}", COLLECTION_PATH),
            "get": format!("GET {}", MEMBER_PATH),
            "update": format!("PUT|PATCH {}", MEMBER_PATH),
            "delete": format!("DELETE {}", MEMBER_PATH),
            "health": "GET /health"
        }
    }))
}

/// Health check endpoint; pings the store.
async fn health_check(State(server): State<ApiServer>) -> impl IntoResponse {
    let store = server.store();
    let timestamp = chrono::Utc::now().to_rfc3339();

    let ping = tokio::time::timeout(server.config().request.timeout, store.ping()).await;
    match ping {
        Ok(Ok(())) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "status": "healthy",
                "store": store.backend(),
                "timestamp": timestamp
            })),
        ),
        outcome => {
            let error = match outcome {
                Ok(Err(e)) => e.to_string(),
                _ => "store ping timed out".to_string(),
            };
            warn!("Health check failed: {}", error);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({
                    "status": "unhealthy",
                    "store": store.backend(),
                    "error": error,
                    "timestamp": timestamp
                })),
            )
        }
    }
}
