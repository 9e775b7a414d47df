//! Unit endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::json;

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{CreateUnit, Page, PageParams, Unit, UnitPatch, UnitStatistics};
use crate::services::UnitService;

/// POST /units - create a new unit
async fn create_unit(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateUnit>,
) -> Result<(StatusCode, Json<Unit>), ApiError> {
    payload.validate()?;
    let unit = UnitService::new(&state.db).create(&payload).await?;
    Ok((StatusCode::CREATED, Json(unit)))
}

/// GET /units - list with pagination
async fn list_units(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> Result<Json<Vec<Unit>>, ApiError> {
    let units = UnitService::new(&state.db).list(Page::from(params)).await?;
    Ok(Json(units))
}

/// GET /units/{id}
async fn get_unit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<Unit>, ApiError> {
    let unit = UnitService::new(&state.db).get(id).await?;
    Ok(Json(unit))
}

/// PUT /units/{id} - partial update, omitted fields are left untouched
async fn update_unit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(patch): Json<UnitPatch>,
) -> Result<Json<Unit>, ApiError> {
    patch.validate()?;
    let unit = UnitService::new(&state.db).update(id, &patch).await?;
    Ok(Json(unit))
}

/// DELETE /units/{id} - cascades to sensors and their readings
async fn delete_unit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, ApiError> {
    UnitService::new(&state.db).delete(id).await?;
    Ok(Json(json!({
        "message": format!("Unit with id {} deleted successfully", id),
        "deleted_id": id
    })))
}

/// GET /units/{id}/statistics - one aggregate round-trip
async fn unit_statistics(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<UnitStatistics>, ApiError> {
    let stats = UnitService::new(&state.db).statistics(id).await?;
    Ok(Json(stats))
}

/// Unit routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/units", get(list_units).post(create_unit))
        .route(
            "/units/{id}",
            get(get_unit).put(update_unit).delete(delete_unit),
        )
        .route("/units/{id}/statistics", get(unit_statistics))
}
