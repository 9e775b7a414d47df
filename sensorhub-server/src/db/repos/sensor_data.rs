//! Sensor-data repository
//!
//! Readings are append-ordered by timestamp. Listing filters by sensor
//! and/or workflow status, conjunctively when both are present.

use sqlx::{Postgres, QueryBuilder};

use crate::db::{Db, DbError};
use crate::models::{
    CreateSensorData, DataStatus, Page, SensorData, SensorDataPatch, SensorDataWithDetails,
};

use super::returned_row;

const COLUMNS: &str = "id, sensor_id, value, unit, status, timestamp";

/// Optional exact-match filters for listing readings.
#[derive(Debug, Clone, Copy, Default)]
pub struct SensorDataFilter {
    pub sensor_id: Option<i32>,
    pub status: Option<DataStatus>,
}

pub struct SensorDataRepo<'a> {
    db: &'a Db,
}

impl<'a> SensorDataRepo<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { db }
    }

    pub async fn create(&self, payload: &CreateSensorData) -> Result<SensorData, DbError> {
        let query = sqlx::query_as(
            "INSERT INTO sensor_data (sensor_id, value, unit, status) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, sensor_id, value, unit, status, timestamp",
        )
        .bind(payload.sensor_id)
        .bind(payload.value)
        .bind(&payload.unit)
        .bind(payload.status);

        returned_row(self.db.fetch_optional(query).await?)
    }

    pub async fn get(&self, id: i32) -> Result<Option<SensorData>, DbError> {
        let query = sqlx::query_as(
            "SELECT id, sensor_id, value, unit, status, timestamp FROM sensor_data WHERE id = $1",
        )
        .bind(id);

        self.db.fetch_optional(query).await
    }

    pub async fn list(
        &self,
        filter: SensorDataFilter,
        page: Page,
    ) -> Result<Vec<SensorData>, DbError> {
        let mut builder = QueryBuilder::<Postgres>::new(
            "SELECT id, sensor_id, value, unit, status, timestamp FROM sensor_data",
        );
        if let Some(sensor_id) = filter.sensor_id {
            builder.push(" WHERE sensor_id = ").push_bind(sensor_id);
        }
        if let Some(status) = filter.status {
            let prefix = if filter.sensor_id.is_some() {
                " AND "
            } else {
                " WHERE "
            };
            builder.push(prefix).push("status = ").push_bind(status);
        }
        builder
            .push(" ORDER BY timestamp DESC LIMIT ")
            .push_bind(page.limit());
        builder.push(" OFFSET ").push_bind(page.offset());

        self.db.fetch_all(builder.build_query_as()).await
    }

    /// Readings joined with their sensor and owning unit names, newest first.
    pub async fn list_with_details(
        &self,
        page: Page,
    ) -> Result<Vec<SensorDataWithDetails>, DbError> {
        let query = sqlx::query_as(
            r#"
            SELECT
                sd.id,
                sd.sensor_id,
                sd.value,
                sd.unit,
                sd.status,
                sd.timestamp,
                s.name AS sensor_name,
                s.sensor_type,
                u.name AS unit_name
            FROM sensor_data sd
            JOIN sensors s ON sd.sensor_id = s.id
            JOIN units u ON s.unit_id = u.id
            ORDER BY sd.timestamp DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit())
        .bind(page.offset());

        self.db.fetch_all(query).await
    }

    pub async fn update(
        &self,
        id: i32,
        patch: &SensorDataPatch,
    ) -> Result<Option<SensorData>, DbError> {
        if patch.is_empty() {
            return self.get(id).await;
        }

        let mut builder = QueryBuilder::<Postgres>::new("UPDATE sensor_data SET ");
        let mut fields = builder.separated(", ");
        if let Some(value) = patch.value {
            fields.push("value = ").push_bind_unseparated(value);
        }
        if let Some(unit) = &patch.unit {
            fields.push("unit = ").push_bind_unseparated(unit);
        }
        if let Some(status) = patch.status {
            fields.push("status = ").push_bind_unseparated(status);
        }
        builder.push(" WHERE id = ").push_bind(id);
        builder.push(" RETURNING ").push(COLUMNS);

        self.db.fetch_optional(builder.build_query_as()).await
    }

    /// Targeted single-column write used by the workflow transitions.
    pub async fn set_status(
        &self,
        id: i32,
        status: DataStatus,
    ) -> Result<Option<SensorData>, DbError> {
        let query = sqlx::query_as(
            "UPDATE sensor_data SET status = $1 WHERE id = $2 \
             RETURNING id, sensor_id, value, unit, status, timestamp",
        )
        .bind(status)
        .bind(id);

        self.db.fetch_optional(query).await
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbError> {
        let affected = self
            .db
            .execute(sqlx::query("DELETE FROM sensor_data WHERE id = $1").bind(id))
            .await?;
        Ok(affected == 1)
    }
}
