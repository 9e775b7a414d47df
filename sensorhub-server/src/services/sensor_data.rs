//! Sensor-data business logic and the status workflow
//!
//! The dedicated `validate`/`archive` operations re-read the row, check the
//! transition table, then issue one targeted status write. The generic
//! `update` deliberately skips the guard: a caller that supplies `status`
//! in a patch can move a reading anywhere.

use crate::db::repos::{SensorDataFilter, SensorDataRepo, SensorRepo};
use crate::db::Db;
use crate::models::{
    CreateSensorData, DataStatus, Page, SensorData, SensorDataPatch, SensorDataWithDetails,
};

use super::ServiceError;

const RESOURCE: &str = "Sensor data";

pub struct SensorDataService<'a> {
    readings: SensorDataRepo<'a>,
    sensors: SensorRepo<'a>,
}

impl<'a> SensorDataService<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self {
            readings: SensorDataRepo::new(db),
            sensors: SensorRepo::new(db),
        }
    }

    pub async fn create(&self, payload: &CreateSensorData) -> Result<SensorData, ServiceError> {
        if self.sensors.get(payload.sensor_id).await?.is_none() {
            return Err(ServiceError::NotFound {
                resource: "Sensor",
                id: payload.sensor_id,
            });
        }
        Ok(self.readings.create(payload).await?)
    }

    pub async fn get(&self, id: i32) -> Result<SensorData, ServiceError> {
        self.readings
            .get(id)
            .await?
            .ok_or(ServiceError::NotFound { resource: RESOURCE, id })
    }

    pub async fn list(
        &self,
        filter: SensorDataFilter,
        page: Page,
    ) -> Result<Vec<SensorData>, ServiceError> {
        Ok(self.readings.list(filter, page).await?)
    }

    pub async fn list_with_details(
        &self,
        page: Page,
    ) -> Result<Vec<SensorDataWithDetails>, ServiceError> {
        Ok(self.readings.list_with_details(page).await?)
    }

    pub async fn update(
        &self,
        id: i32,
        patch: &SensorDataPatch,
    ) -> Result<SensorData, ServiceError> {
        self.get(id).await?;
        self.readings
            .update(id, patch)
            .await?
            .ok_or(ServiceError::NotFound { resource: RESOURCE, id })
    }

    /// pending -> validated
    pub async fn validate(&self, id: i32) -> Result<SensorData, ServiceError> {
        let existing = self.get(id).await?;
        if !existing.status.can_validate() {
            tracing::warn!(data_id = id, status = %existing.status, "rejected validate");
            return Err(ServiceError::InvalidTransition {
                action: "validate",
                from: existing.status,
            });
        }
        self.readings
            .set_status(id, DataStatus::Validated)
            .await?
            .ok_or(ServiceError::NotFound { resource: RESOURCE, id })
    }

    /// pending | validated -> archived
    pub async fn archive(&self, id: i32) -> Result<SensorData, ServiceError> {
        let existing = self.get(id).await?;
        if !existing.status.can_archive() {
            tracing::warn!(data_id = id, status = %existing.status, "rejected archive");
            return Err(ServiceError::InvalidTransition {
                action: "archive",
                from: existing.status,
            });
        }
        self.readings
            .set_status(id, DataStatus::Archived)
            .await?
            .ok_or(ServiceError::NotFound { resource: RESOURCE, id })
    }

    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.get(id).await?;
        if !self.readings.delete(id).await? {
            return Err(ServiceError::NotFound { resource: RESOURCE, id });
        }
        Ok(())
    }
}
