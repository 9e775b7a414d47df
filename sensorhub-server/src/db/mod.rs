//! Database layer - connection pool, base query contract, repositories
//!
//! # Design Principles
//!
//! - One bounded pool per process, created at startup and passed by handle -
//!   no global accessor
//! - Repositories never touch a raw connection; everything funnels through
//!   the execute / fetch_optional / fetch_all primitives on [`Db`]
//! - Always `$n` binds, never interpolated SQL
//! - "No row" is an ordinary `None`/empty result; only transport and
//!   constraint failures are errors
//! - Referential integrity and cascades are the store's job (FKs with
//!   `ON DELETE CASCADE`), not application fan-out

pub mod error;
pub mod pool;
pub mod repos;

pub use error::DbError;
pub use pool::connect;

use sqlx::postgres::{PgArguments, PgRow};
use sqlx::{FromRow, PgPool, Postgres};

/// A ready-to-run parameterized statement.
pub(crate) type PgQuery<'q> = sqlx::query::Query<'q, Postgres, PgArguments>;

/// A ready-to-run parameterized query mapped to row type `T`.
pub(crate) type PgQueryAs<'q, T> = sqlx::query::QueryAs<'q, Postgres, T, PgArguments>;

/// Handle to the connection pool, cloned into state and borrowed by
/// repositories. Carries the three primitives every repository composes
/// against.
#[derive(Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run a statement that modifies data; returns the affected row count.
    pub(crate) async fn execute(&self, query: PgQuery<'_>) -> Result<u64, DbError> {
        let result = query.execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    /// Fetch the first matching row, or `None` when nothing matches.
    pub(crate) async fn fetch_optional<T>(
        &self,
        query: PgQueryAs<'_, T>,
    ) -> Result<Option<T>, DbError>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        Ok(query.fetch_optional(&self.pool).await?)
    }

    /// Fetch all matching rows; empty when nothing matches.
    pub(crate) async fn fetch_all<T>(&self, query: PgQueryAs<'_, T>) -> Result<Vec<T>, DbError>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        Ok(query.fetch_all(&self.pool).await?)
    }

    /// Round-trip a trivial statement; used by the health endpoint.
    pub async fn ping(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Drain and close the pool. Safe to call more than once.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
