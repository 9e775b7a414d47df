//! Sensor repository
//!
//! `unit_id` is written once at creation and never patched; a create
//! against a missing unit surfaces the store's FK rejection as a
//! constraint violation.

use sqlx::{Postgres, QueryBuilder};

use crate::db::{Db, DbError};
use crate::models::{CreateSensor, Page, Sensor, SensorPatch};

use super::returned_row;

const COLUMNS: &str = "id, name, sensor_type, unit_id, status, description, created_at";

pub struct SensorRepo<'a> {
    db: &'a Db,
}

impl<'a> SensorRepo<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { db }
    }

    pub async fn create(&self, payload: &CreateSensor) -> Result<Sensor, DbError> {
        let query = sqlx::query_as(
            "INSERT INTO sensors (name, sensor_type, unit_id, status, description) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id, name, sensor_type, unit_id, status, description, created_at",
        )
        .bind(&payload.name)
        .bind(payload.sensor_type)
        .bind(payload.unit_id)
        .bind(payload.status)
        .bind(&payload.description);

        returned_row(self.db.fetch_optional(query).await?)
    }

    pub async fn get(&self, id: i32) -> Result<Option<Sensor>, DbError> {
        let query = sqlx::query_as(
            "SELECT id, name, sensor_type, unit_id, status, description, created_at \
             FROM sensors WHERE id = $1",
        )
        .bind(id);

        self.db.fetch_optional(query).await
    }

    /// List sensors, optionally restricted to one unit. No filter means no
    /// restriction on that column.
    pub async fn list(&self, unit_id: Option<i32>, page: Page) -> Result<Vec<Sensor>, DbError> {
        let mut builder = QueryBuilder::<Postgres>::new(
            "SELECT id, name, sensor_type, unit_id, status, description, created_at FROM sensors",
        );
        if let Some(unit_id) = unit_id {
            builder.push(" WHERE unit_id = ").push_bind(unit_id);
        }
        builder
            .push(" ORDER BY created_at DESC LIMIT ")
            .push_bind(page.limit());
        builder.push(" OFFSET ").push_bind(page.offset());

        self.db.fetch_all(builder.build_query_as()).await
    }

    pub async fn update(&self, id: i32, patch: &SensorPatch) -> Result<Option<Sensor>, DbError> {
        if patch.is_empty() {
            return self.get(id).await;
        }

        let mut builder = QueryBuilder::<Postgres>::new("UPDATE sensors SET ");
        let mut fields = builder.separated(", ");
        if let Some(name) = &patch.name {
            fields.push("name = ").push_bind_unseparated(name);
        }
        if let Some(sensor_type) = patch.sensor_type {
            fields.push("sensor_type = ").push_bind_unseparated(sensor_type);
        }
        if let Some(status) = patch.status {
            fields.push("status = ").push_bind_unseparated(status);
        }
        if let Some(description) = &patch.description {
            fields.push("description = ").push_bind_unseparated(description);
        }
        builder.push(" WHERE id = ").push_bind(id);
        builder.push(" RETURNING ").push(COLUMNS);

        self.db.fetch_optional(builder.build_query_as()).await
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbError> {
        let affected = self
            .db
            .execute(sqlx::query("DELETE FROM sensors WHERE id = $1").bind(id))
            .await?;
        Ok(affected == 1)
    }
}
