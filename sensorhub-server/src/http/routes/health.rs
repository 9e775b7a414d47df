//! Service banner and health check endpoints

use std::sync::Arc;

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::http::server::AppState;

/// Root banner response
#[derive(Serialize)]
pub struct ServiceInfo {
    pub message: &'static str,
    pub version: &'static str,
    pub status: &'static str,
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// GET /
async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Sensor Management API",
        version: env!("CARGO_PKG_VERSION"),
        status: "running",
    })
}

/// GET /health - verifies a connection can actually be checked out
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    match state.db.ping().await {
        Ok(()) => Json(HealthResponse {
            status: "healthy",
            database: "connected",
            error: None,
        }),
        Err(err) => {
            tracing::error!("Health check failed: {}", err);
            Json(HealthResponse {
                status: "unhealthy",
                database: "disconnected",
                error: Some(err.to_string()),
            })
        }
    }
}

/// Meta routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn root_banner() {
        let Json(body) = root().await;
        assert_eq!(body.status, "running");
        assert_eq!(body.message, "Sensor Management API");
    }
}
