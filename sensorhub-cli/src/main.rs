//! sensorhub CLI - REST service for units, sensors, and sensor readings
//!
//! Usage:
//!   sensorhub serve                   # Start the HTTP server on 127.0.0.1:8000
//!   sensorhub --debug serve           # Debug logging to console
//!   RUST_LOG=sensorhub=debug sensorhub serve   # Fine-grained log control
//!
//! Database settings come from the environment (`DATABASE_URL` or the
//! `SENSORHUB_DATABASE_*` variables); a `.env` file is loaded if present.
//! The schema under `sensorhub-server/migrations/` must be provisioned
//! before the first start.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod serve;

#[derive(Parser, Debug)]
#[command(
    name = "sensorhub",
    author,
    version,
    about = "Hierarchical IoT metadata service: units, sensors, and readings over PostgreSQL"
)]
struct Cli {
    /// Enable debug logging (sets RUST_LOG=debug if not already set)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(serve::ServeArgs),
}

/// Initialize tracing with console output.
fn init_tracing(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug) // Show targets in debug mode
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before reading any configuration.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.debug)?;

    match cli.command {
        Commands::Serve(args) => serve::run(args).await,
    }
}
