//! Unit business logic

use crate::db::repos::UnitRepo;
use crate::db::Db;
use crate::models::{CreateUnit, Page, Unit, UnitPatch, UnitStatistics};

use super::ServiceError;

const RESOURCE: &str = "Unit";

pub struct UnitService<'a> {
    units: UnitRepo<'a>,
}

impl<'a> UnitService<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self {
            units: UnitRepo::new(db),
        }
    }

    pub async fn create(&self, payload: &CreateUnit) -> Result<Unit, ServiceError> {
        Ok(self.units.create(payload).await?)
    }

    pub async fn get(&self, id: i32) -> Result<Unit, ServiceError> {
        self.units
            .get(id)
            .await?
            .ok_or(ServiceError::NotFound { resource: RESOURCE, id })
    }

    pub async fn list(&self, page: Page) -> Result<Vec<Unit>, ServiceError> {
        Ok(self.units.list(page).await?)
    }

    pub async fn update(&self, id: i32, patch: &UnitPatch) -> Result<Unit, ServiceError> {
        self.get(id).await?;
        self.units
            .update(id, patch)
            .await?
            .ok_or(ServiceError::NotFound { resource: RESOURCE, id })
    }

    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.get(id).await?;
        if !self.units.delete(id).await? {
            return Err(ServiceError::NotFound { resource: RESOURCE, id });
        }
        Ok(())
    }

    /// One aggregate round-trip; the unit's existence is verified first so a
    /// missing unit reads as not-found rather than an all-zero record.
    pub async fn statistics(&self, id: i32) -> Result<UnitStatistics, ServiceError> {
        self.get(id).await?;
        self.units
            .statistics(id)
            .await?
            .ok_or(ServiceError::NotFound { resource: RESOURCE, id })
    }
}
