//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! Storage internals are logged here and never leak into response bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;
use crate::services::ServiceError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Payload validation failed (400)
    Validation(ValidationError),

    /// Resource not found (404)
    NotFound { resource: &'static str, id: i32 },

    /// The store rejected the statement (400)
    Constraint { message: String },

    /// Workflow transition not permitted (409)
    Conflict { message: String },

    /// Database unreachable (503, logged)
    Unavailable(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(e) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "validation_error",
                    "message": e.to_string()
                }),
            ),
            Self::NotFound { resource, id } => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "not_found",
                    "message": format!("{} with id {} not found", resource, id)
                }),
            ),
            Self::Constraint { message } => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "constraint_violation",
                    "message": message
                }),
            ),
            Self::Conflict { message } => (
                StatusCode::CONFLICT,
                json!({
                    "error": "conflict",
                    "message": message
                }),
            ),
            Self::Unavailable(e) => {
                // Log the actual error, return a generic message
                tracing::error!("Storage unavailable: {}", e);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    json!({
                        "error": "storage_unavailable",
                        "message": "database is unavailable"
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::Constraint { message } => Self::Constraint { message },
            unavailable @ DbError::Unavailable { .. } => Self::Unavailable(unavailable),
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound { resource, id } => Self::NotFound { resource, id },
            conflict @ ServiceError::InvalidTransition { .. } => Self::Conflict {
                message: conflict.to_string(),
            },
            ServiceError::Db(db) => Self::from(db),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DataStatus;

    #[tokio::test]
    async fn validation_error_is_400() {
        let err = ApiError::Validation(ValidationError::Empty { field: "name" });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let err = ApiError::from(ServiceError::NotFound {
            resource: "Unit",
            id: 1,
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn invalid_transition_is_409() {
        let err = ApiError::from(ServiceError::InvalidTransition {
            action: "validate",
            from: DataStatus::Archived,
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn constraint_is_400() {
        let err = ApiError::from(DbError::Constraint {
            message: "fk violation".into(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unavailable_is_503() {
        let err = ApiError::from(DbError::from(sqlx::Error::PoolTimedOut));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
