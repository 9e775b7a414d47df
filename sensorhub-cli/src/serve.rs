//! `serve` subcommand - pool up, server run, pool down

use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result};
use clap::Parser;
use sensorhub_server::{db, DatabaseConfig, ServerConfig};

#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind the HTTP server to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port to bind the HTTP server to
    #[arg(long, default_value_t = 8000)]
    pub port: u16,

    /// Allow requests from any origin
    ///
    /// WARNING: only use for development or documented use cases.
    #[arg(long)]
    pub cors_permissive: bool,
}

pub async fn run(args: ServeArgs) -> Result<()> {
    let db_config = DatabaseConfig::from_env();
    let db = db::connect(&db_config)
        .await
        .context("failed to initialize database pool")?;
    tracing::info!(
        min_connections = db_config.min_connections,
        max_connections = db_config.max_connections,
        "database pool initialized"
    );

    let server_config = ServerConfig {
        bind_addr: SocketAddr::new(args.host, args.port),
        cors_permissive: args.cors_permissive,
    };

    sensorhub_server::run_server(db, server_config)
        .await
        .context("server exited with error")?;

    Ok(())
}
