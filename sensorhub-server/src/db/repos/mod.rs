//! Entity repositories
//!
//! One repository per table, each a thin borrow of the [`Db`](super::Db)
//! handle. All SQL lives here; every statement goes through the base
//! contract and uses positional binds. Mutations hand the refreshed row
//! back via `RETURNING`.

pub mod sensor_data;
pub mod sensors;
pub mod units;

pub use sensor_data::{SensorDataFilter, SensorDataRepo};
pub use sensors::SensorRepo;
pub use units::UnitRepo;

use super::DbError;

/// An INSERT ... RETURNING produces a row whenever the statement succeeds;
/// an absent row here means the response was lost in transit.
pub(crate) fn returned_row<T>(row: Option<T>) -> Result<T, DbError> {
    row.ok_or(DbError::Unavailable {
        source: sqlx::Error::RowNotFound,
    })
}
