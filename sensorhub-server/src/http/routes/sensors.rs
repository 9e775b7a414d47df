//! Sensor endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{CreateSensor, Page, Sensor, SensorPatch};
use crate::services::SensorService;

/// Query parameters for sensor listing
#[derive(Debug, Default, Deserialize)]
struct ListSensorsParams {
    skip: Option<i64>,
    limit: Option<i64>,
    unit_id: Option<i32>,
}

/// POST /sensors - create a sensor under an existing unit
async fn create_sensor(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateSensor>,
) -> Result<(StatusCode, Json<Sensor>), ApiError> {
    payload.validate()?;
    let sensor = SensorService::new(&state.db).create(&payload).await?;
    Ok((StatusCode::CREATED, Json(sensor)))
}

/// GET /sensors - list, optionally filtered by unit
async fn list_sensors(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListSensorsParams>,
) -> Result<Json<Vec<Sensor>>, ApiError> {
    let page = Page::new(params.skip.unwrap_or(0), params.limit.unwrap_or(100));
    let sensors = SensorService::new(&state.db)
        .list(params.unit_id, page)
        .await?;
    Ok(Json(sensors))
}

/// GET /sensors/{id}
async fn get_sensor(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<Sensor>, ApiError> {
    let sensor = SensorService::new(&state.db).get(id).await?;
    Ok(Json(sensor))
}

/// PUT /sensors/{id} - partial update; unit_id is immutable
async fn update_sensor(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(patch): Json<SensorPatch>,
) -> Result<Json<Sensor>, ApiError> {
    patch.validate()?;
    let sensor = SensorService::new(&state.db).update(id, &patch).await?;
    Ok(Json(sensor))
}

/// DELETE /sensors/{id} - cascades to the sensor's readings
async fn delete_sensor(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, ApiError> {
    SensorService::new(&state.db).delete(id).await?;
    Ok(Json(json!({
        "message": format!("Sensor with id {} deleted successfully", id),
        "deleted_id": id
    })))
}

/// Sensor routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/sensors", get(list_sensors).post(create_sensor))
        .route(
            "/sensors/{id}",
            get(get_sensor).put(update_sensor).delete(delete_sensor),
        )
}
