//! Orchestration layer
//!
//! One service per entity, constructed per request over a borrowed [`Db`]
//! handle. Services own the business rules the repositories don't:
//! existence checks before mutation, parent checks before child creation,
//! the reading status workflow, and translating row absence into a domain
//! not-found. Each logical operation issues exactly one repository call
//! beyond its existence check; check-then-mutate sequences are not wrapped
//! in a transaction, so a concurrent delete can still win the race and
//! surface through the store.

pub mod error;
pub mod sensor_data;
pub mod sensors;
pub mod units;

pub use error::ServiceError;
pub use sensor_data::SensorDataService;
pub use sensors::SensorService;
pub use units::UnitService;
