//! Unit: an organizational location owning sensors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::{require_text, ValidationError};

const NAME_MAX: usize = 255;
const LOCATION_MAX: usize = 500;

/// Unit row as persisted.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Unit {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a unit.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUnit {
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl CreateUnit {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name, NAME_MAX)?;
        require_text("location", &self.location, LOCATION_MAX)?;
        Ok(())
    }
}

/// Partial update: only supplied fields are written.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UnitPatch {
    pub name: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
}

impl UnitPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.location.is_none() && self.description.is_none()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            require_text("name", name, NAME_MAX)?;
        }
        if let Some(location) = &self.location {
            require_text("location", location, LOCATION_MAX)?;
        }
        Ok(())
    }
}

/// Aggregated view over a unit's sensors and their readings, produced by a
/// single GROUP BY query.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct UnitStatistics {
    pub unit_id: i32,
    pub unit_name: String,
    pub total_sensors: i64,
    pub active_sensors: i64,
    pub inactive_sensors: i64,
    pub maintenance_sensors: i64,
    pub total_data_points: i64,
    pub latest_data_timestamp: Option<DateTime<Utc>>,
}
