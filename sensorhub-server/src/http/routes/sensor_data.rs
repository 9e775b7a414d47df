//! Sensor-data endpoints, including the status workflow transitions

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use crate::db::repos::SensorDataFilter;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{CreateSensorData, DataStatus, Page, SensorData, SensorDataPatch};
use crate::services::SensorDataService;

/// Query parameters for reading listing
#[derive(Debug, Default, Deserialize)]
struct ListSensorDataParams {
    skip: Option<i64>,
    limit: Option<i64>,
    sensor_id: Option<i32>,
    status: Option<DataStatus>,
    with_details: Option<bool>,
}

/// POST /sensor-data - record a reading for an existing sensor
async fn create_reading(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateSensorData>,
) -> Result<(StatusCode, Json<SensorData>), ApiError> {
    payload.validate()?;
    let reading = SensorDataService::new(&state.db).create(&payload).await?;
    Ok((StatusCode::CREATED, Json(reading)))
}

/// GET /sensor-data - list, filtered by sensor and/or status; with
/// `with_details=true` each row carries its sensor and unit names
async fn list_readings(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListSensorDataParams>,
) -> Result<Response, ApiError> {
    let page = Page::new(params.skip.unwrap_or(0), params.limit.unwrap_or(100));
    let service = SensorDataService::new(&state.db);

    if params.with_details.unwrap_or(false) {
        let readings = service.list_with_details(page).await?;
        return Ok(Json(readings).into_response());
    }

    let filter = SensorDataFilter {
        sensor_id: params.sensor_id,
        status: params.status,
    };
    let readings = service.list(filter, page).await?;
    Ok(Json(readings).into_response())
}

/// GET /sensor-data/{id}
async fn get_reading(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<SensorData>, ApiError> {
    let reading = SensorDataService::new(&state.db).get(id).await?;
    Ok(Json(reading))
}

/// PUT /sensor-data/{id} - partial update; a supplied status bypasses the
/// workflow guards
async fn update_reading(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(patch): Json<SensorDataPatch>,
) -> Result<Json<SensorData>, ApiError> {
    patch.validate()?;
    let reading = SensorDataService::new(&state.db).update(id, &patch).await?;
    Ok(Json(reading))
}

/// POST /sensor-data/{id}/validate - pending -> validated
async fn validate_reading(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<SensorData>, ApiError> {
    let reading = SensorDataService::new(&state.db).validate(id).await?;
    Ok(Json(reading))
}

/// POST /sensor-data/{id}/archive - pending|validated -> archived
async fn archive_reading(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<SensorData>, ApiError> {
    let reading = SensorDataService::new(&state.db).archive(id).await?;
    Ok(Json(reading))
}

/// DELETE /sensor-data/{id}
async fn delete_reading(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, ApiError> {
    SensorDataService::new(&state.db).delete(id).await?;
    Ok(Json(json!({
        "message": format!("Sensor data with id {} deleted successfully", id),
        "deleted_id": id
    })))
}

/// Sensor-data routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/sensor-data", get(list_readings).post(create_reading))
        .route(
            "/sensor-data/{id}",
            get(get_reading).put(update_reading).delete(delete_reading),
        )
        .route("/sensor-data/{id}/validate", post(validate_reading))
        .route("/sensor-data/{id}/archive", post(archive_reading))
}
