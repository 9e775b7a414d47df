//! sensorhub-server: REST service for hierarchical IoT metadata
//!
//! Units own sensors, sensors own time-stamped readings. Persistence is
//! plain parameterized SQL over a bounded PostgreSQL pool - no ORM.
//!
//! Layering, bottom up:
//! - [`db`] - connection pool, the execute/fetch-one/fetch-many base
//!   contract, and the per-entity repositories built on top of it
//! - [`services`] - orchestration: existence checks, the reading status
//!   workflow, translation of absence into not-found
//! - [`http`] - axum routes, error-to-status mapping, server lifecycle
//!
//! The schema lives in `migrations/` and is provisioned externally before
//! the server starts; nothing here applies it.

pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod services;

pub use config::{DatabaseConfig, ServerConfig};
pub use db::{connect, Db, DbError};
pub use http::run_server;
