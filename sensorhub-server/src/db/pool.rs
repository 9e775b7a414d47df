//! Connection pool lifecycle
//!
//! Built once at startup from [`DatabaseConfig`] and handed around as a
//! [`Db`] handle; no process-global accessor. sqlx checks connections out
//! per statement and returns them on every exit path, including
//! cancellation.

use sqlx::postgres::PgPoolOptions;

use crate::config::DatabaseConfig;

use super::{Db, DbError};

/// Create the bounded connection pool and wrap it in a [`Db`] handle.
///
/// Fails with [`DbError::Unavailable`] when the target cannot be reached.
pub async fn connect(config: &DatabaseConfig) -> Result<Db, DbError> {
    let pool = PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.url())
        .await?;

    Ok(Db::new(pool))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p sensorhub-server -- --ignored

    fn env_config() -> DatabaseConfig {
        DatabaseConfig::from_env()
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection() {
        let db = connect(&env_config()).await.expect("pool creation failed");
        db.ping().await.expect("ping failed");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn close_is_idempotent() {
        let db = connect(&env_config()).await.expect("pool creation failed");
        db.close().await;
        db.close().await;
        assert!(db.ping().await.is_err());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn concurrent_pool_access() {
        let db = connect(&env_config()).await.expect("pool creation failed");

        let handles: Vec<_> = (0..10)
            .map(|_| {
                let db = db.clone();
                tokio::spawn(async move { db.ping().await })
            })
            .collect();

        for handle in handles {
            handle.await.expect("task panicked").expect("ping failed");
        }
    }
}
