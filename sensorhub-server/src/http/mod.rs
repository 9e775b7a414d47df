//! HTTP layer - axum routes, error mapping, server lifecycle
//!
//! A thin collaborator over the services: handlers validate payloads,
//! translate query parameters, call one service method, and let
//! [`error::ApiError`] map the outcome to a status code.

pub mod error;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{run_server, AppState, ServerError};
