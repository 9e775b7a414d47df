use thiserror::Error;

use crate::db::DbError;
use crate::models::DataStatus;

/// Failures surfaced by the orchestration layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Referenced row is absent.
    #[error("{resource} with id {id} not found")]
    NotFound { resource: &'static str, id: i32 },

    /// A dedicated workflow operation was invoked from a status it does not
    /// accept.
    #[error("cannot {action} reading in status '{from}'")]
    InvalidTransition {
        action: &'static str,
        from: DataStatus,
    },

    #[error(transparent)]
    Db(#[from] DbError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message() {
        let err = ServiceError::NotFound {
            resource: "Unit",
            id: 7,
        };
        assert_eq!(err.to_string(), "Unit with id 7 not found");
    }

    #[test]
    fn transition_message_names_status() {
        let err = ServiceError::InvalidTransition {
            action: "validate",
            from: DataStatus::Archived,
        };
        assert_eq!(err.to_string(), "cannot validate reading in status 'archived'");
    }
}
