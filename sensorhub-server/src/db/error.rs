//! Database error type and sqlx error classification
//!
//! The base contract distinguishes exactly two failure classes: the store
//! rejected the statement (constraint breach) or the store could not be
//! reached/used (everything else). "Row absent" is never an error here -
//! not-found meaning is added by the orchestration layer.

use sqlx::error::ErrorKind;
use thiserror::Error;

/// Failures surfaced by the database layer.
#[derive(Debug, Error)]
pub enum DbError {
    /// The store rejected the statement: foreign key, uniqueness, check, or
    /// not-null breach.
    #[error("constraint violation: {message}")]
    Constraint { message: String },

    /// Transport or pool failure - the statement never took effect.
    #[error("storage unavailable: {source}")]
    Unavailable {
        #[source]
        source: sqlx::Error,
    },
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            match db_err.kind() {
                ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => {
                    return DbError::Constraint {
                        message: db_err.message().to_string(),
                    };
                }
                _ => {}
            }
        }
        DbError::Unavailable { source: err }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_timeout_is_unavailable() {
        let err = DbError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, DbError::Unavailable { .. }));
    }

    #[test]
    fn closed_pool_is_unavailable() {
        let err = DbError::from(sqlx::Error::PoolClosed);
        assert!(matches!(err, DbError::Unavailable { .. }));
    }
}
