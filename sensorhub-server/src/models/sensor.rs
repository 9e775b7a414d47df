//! Sensor: a typed device attached to a unit

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::{require_text, ValidationError};

const NAME_MAX: usize = 255;

/// What a sensor measures. Wire names map 1:1 onto the Postgres
/// `sensor_type_enum` labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "sensor_type_enum", rename_all = "lowercase")]
pub enum SensorType {
    Temperature,
    Humidity,
    Pressure,
    Motion,
    Light,
    Sound,
}

/// Operational state of a sensor (`sensor_status_enum`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "sensor_status_enum", rename_all = "lowercase")]
pub enum SensorStatus {
    #[default]
    Active,
    Inactive,
    Maintenance,
}

/// Sensor row as persisted.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Sensor {
    pub id: i32,
    pub name: String,
    pub sensor_type: SensorType,
    pub unit_id: i32,
    pub status: SensorStatus,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a sensor. `unit_id` must reference a live unit.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSensor {
    pub name: String,
    pub sensor_type: SensorType,
    pub unit_id: i32,
    #[serde(default)]
    pub status: SensorStatus,
    #[serde(default)]
    pub description: Option<String>,
}

impl CreateSensor {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name, NAME_MAX)
    }
}

/// Partial update. `unit_id` is immutable after creation and is therefore
/// not patchable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SensorPatch {
    pub name: Option<String>,
    pub sensor_type: Option<SensorType>,
    pub status: Option<SensorStatus>,
    pub description: Option<String>,
}

impl SensorPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.sensor_type.is_none()
            && self.status.is_none()
            && self.description.is_none()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            require_text("name", name, NAME_MAX)?;
        }
        Ok(())
    }
}
