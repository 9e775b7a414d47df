//! SensorData: one time-stamped reading with a validation-workflow status

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::sensor::SensorType;
use super::validation::{require_max, ValidationError};

const UNIT_TEXT_MAX: usize = 50;

/// Workflow status of a reading (`data_status_enum`).
///
/// The dedicated transition operations only allow:
/// pending -> validated (validate), pending|validated -> archived (archive).
/// A generic field update may still write any status directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "data_status_enum", rename_all = "lowercase")]
pub enum DataStatus {
    #[default]
    Pending,
    Validated,
    Archived,
    Invalid,
}

impl DataStatus {
    /// Whether `validate` may run from this status.
    pub fn can_validate(self) -> bool {
        matches!(self, DataStatus::Pending)
    }

    /// Whether `archive` may run from this status.
    pub fn can_archive(self) -> bool {
        matches!(self, DataStatus::Pending | DataStatus::Validated)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DataStatus::Pending => "pending",
            DataStatus::Validated => "validated",
            DataStatus::Archived => "archived",
            DataStatus::Invalid => "invalid",
        }
    }
}

impl fmt::Display for DataStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reading row as persisted. `unit` is the free-text measurement unit
/// (e.g. "°C"), not the owning organizational unit.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SensorData {
    pub id: i32,
    pub sensor_id: i32,
    pub value: f64,
    pub unit: Option<String>,
    pub status: DataStatus,
    pub timestamp: DateTime<Utc>,
}

/// Reading joined with its sensor and owning unit names.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SensorDataWithDetails {
    pub id: i32,
    pub sensor_id: i32,
    pub value: f64,
    pub unit: Option<String>,
    pub status: DataStatus,
    pub timestamp: DateTime<Utc>,
    pub sensor_name: String,
    pub sensor_type: SensorType,
    pub unit_name: String,
}

/// Payload for recording a reading. `sensor_id` must reference a live sensor.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSensorData {
    pub sensor_id: i32,
    pub value: f64,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub status: DataStatus,
}

impl CreateSensorData {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(unit) = &self.unit {
            require_max("unit", unit, UNIT_TEXT_MAX)?;
        }
        Ok(())
    }
}

/// Partial update. Supplying `status` here bypasses the workflow guards.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SensorDataPatch {
    pub value: Option<f64>,
    pub unit: Option<String>,
    pub status: Option<DataStatus>,
}

impl SensorDataPatch {
    pub fn is_empty(&self) -> bool {
        self.value.is_none() && self.unit.is_none() && self.status.is_none()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(unit) = &self.unit {
            require_max("unit", unit, UNIT_TEXT_MAX)?;
        }
        Ok(())
    }
}
