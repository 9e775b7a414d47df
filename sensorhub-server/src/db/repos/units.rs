//! Unit repository
//!
//! CRUD over `units` plus the one-round-trip statistics aggregate.
//! Deleting a unit cascades to its sensors and their readings through the
//! store's FK rules; nothing here fans out deletes.

use sqlx::{Postgres, QueryBuilder};

use crate::db::{Db, DbError};
use crate::models::{CreateUnit, Page, Unit, UnitPatch, UnitStatistics};

use super::returned_row;

const COLUMNS: &str = "id, name, location, description, created_at";

pub struct UnitRepo<'a> {
    db: &'a Db,
}

impl<'a> UnitRepo<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { db }
    }

    pub async fn create(&self, payload: &CreateUnit) -> Result<Unit, DbError> {
        let query = sqlx::query_as(
            "INSERT INTO units (name, location, description) \
             VALUES ($1, $2, $3) \
             RETURNING id, name, location, description, created_at",
        )
        .bind(&payload.name)
        .bind(&payload.location)
        .bind(&payload.description);

        returned_row(self.db.fetch_optional(query).await?)
    }

    pub async fn get(&self, id: i32) -> Result<Option<Unit>, DbError> {
        let query = sqlx::query_as(
            "SELECT id, name, location, description, created_at FROM units WHERE id = $1",
        )
        .bind(id);

        self.db.fetch_optional(query).await
    }

    pub async fn list(&self, page: Page) -> Result<Vec<Unit>, DbError> {
        let query = sqlx::query_as(
            "SELECT id, name, location, description, created_at FROM units \
             ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit())
        .bind(page.offset());

        self.db.fetch_all(query).await
    }

    /// Write only the supplied fields. An empty patch degenerates to a read.
    pub async fn update(&self, id: i32, patch: &UnitPatch) -> Result<Option<Unit>, DbError> {
        if patch.is_empty() {
            return self.get(id).await;
        }

        let mut builder = QueryBuilder::<Postgres>::new("UPDATE units SET ");
        let mut fields = builder.separated(", ");
        if let Some(name) = &patch.name {
            fields.push("name = ").push_bind_unseparated(name);
        }
        if let Some(location) = &patch.location {
            fields.push("location = ").push_bind_unseparated(location);
        }
        if let Some(description) = &patch.description {
            fields.push("description = ").push_bind_unseparated(description);
        }
        builder.push(" WHERE id = ").push_bind(id);
        builder.push(" RETURNING ").push(COLUMNS);

        self.db.fetch_optional(builder.build_query_as()).await
    }

    /// Returns whether a row was actually removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbError> {
        let affected = self
            .db
            .execute(sqlx::query("DELETE FROM units WHERE id = $1").bind(id))
            .await?;
        Ok(affected == 1)
    }

    /// Aggregate sensor and reading counts for one unit in a single query,
    /// so latency stays flat no matter how many sensors the unit owns.
    pub async fn statistics(&self, id: i32) -> Result<Option<UnitStatistics>, DbError> {
        let query = sqlx::query_as(
            r#"
            SELECT
                u.id AS unit_id,
                u.name AS unit_name,
                COUNT(DISTINCT s.id) AS total_sensors,
                COUNT(DISTINCT s.id) FILTER (WHERE s.status = 'active') AS active_sensors,
                COUNT(DISTINCT s.id) FILTER (WHERE s.status = 'inactive') AS inactive_sensors,
                COUNT(DISTINCT s.id) FILTER (WHERE s.status = 'maintenance') AS maintenance_sensors,
                COUNT(sd.id) AS total_data_points,
                MAX(sd.timestamp) AS latest_data_timestamp
            FROM units u
            LEFT JOIN sensors s ON s.unit_id = u.id
            LEFT JOIN sensor_data sd ON sd.sensor_id = s.id
            WHERE u.id = $1
            GROUP BY u.id, u.name
            "#,
        )
        .bind(id);

        self.db.fetch_optional(query).await
    }
}
