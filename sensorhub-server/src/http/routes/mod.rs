//! Route modules, one per resource

pub mod health;
pub mod sensor_data;
pub mod sensors;
pub mod units;

use std::sync::Arc;

use axum::Router;

use super::server::AppState;

/// All `/api/v1` resource routes.
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(units::router())
        .merge(sensors::router())
        .merge(sensor_data::router())
}
