//! Sensor business logic

use crate::db::repos::{SensorRepo, UnitRepo};
use crate::db::Db;
use crate::models::{CreateSensor, Page, Sensor, SensorPatch};

use super::ServiceError;

const RESOURCE: &str = "Sensor";

pub struct SensorService<'a> {
    sensors: SensorRepo<'a>,
    units: UnitRepo<'a>,
}

impl<'a> SensorService<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self {
            sensors: SensorRepo::new(db),
            units: UnitRepo::new(db),
        }
    }

    /// The owning unit is checked up front so a bad reference reads as
    /// not-found. A delete racing past this check still surfaces as a
    /// constraint violation from the store's FK.
    pub async fn create(&self, payload: &CreateSensor) -> Result<Sensor, ServiceError> {
        if self.units.get(payload.unit_id).await?.is_none() {
            return Err(ServiceError::NotFound {
                resource: "Unit",
                id: payload.unit_id,
            });
        }
        Ok(self.sensors.create(payload).await?)
    }

    pub async fn get(&self, id: i32) -> Result<Sensor, ServiceError> {
        self.sensors
            .get(id)
            .await?
            .ok_or(ServiceError::NotFound { resource: RESOURCE, id })
    }

    pub async fn list(
        &self,
        unit_id: Option<i32>,
        page: Page,
    ) -> Result<Vec<Sensor>, ServiceError> {
        Ok(self.sensors.list(unit_id, page).await?)
    }

    pub async fn update(&self, id: i32, patch: &SensorPatch) -> Result<Sensor, ServiceError> {
        self.get(id).await?;
        self.sensors
            .update(id, patch)
            .await?
            .ok_or(ServiceError::NotFound { resource: RESOURCE, id })
    }

    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.get(id).await?;
        if !self.sensors.delete(id).await? {
            return Err(ServiceError::NotFound { resource: RESOURCE, id });
        }
        Ok(())
    }
}
