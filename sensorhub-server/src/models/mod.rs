//! Domain models and request payloads
//!
//! Row structs mirror the persisted schema column-for-column; the enum wire
//! names are part of the on-disk contract and must not drift. Request
//! payloads validate at the edge and return [`ValidationError`], not panics.

pub mod page;
pub mod sensor;
pub mod sensor_data;
pub mod unit;
pub mod validation;

pub use page::{Page, PageParams};
pub use sensor::{CreateSensor, Sensor, SensorPatch, SensorStatus, SensorType};
pub use sensor_data::{
    CreateSensorData, DataStatus, SensorData, SensorDataPatch, SensorDataWithDetails,
};
pub use unit::{CreateUnit, Unit, UnitPatch, UnitStatistics};
pub use validation::ValidationError;
