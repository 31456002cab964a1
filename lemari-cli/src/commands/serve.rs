//! HTTP server command
//!
//! Bootstraps the database (pool, ping, schema) and runs the inventory
//! server until shutdown.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use lemari_server::db;
use lemari_server::db::repos::PgGarmentRepo;
use lemari_server::service::InventoryService;
use lemari_server::{run_server, AppState, DbConfig, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "LEMARI_BIND", default_value = "127.0.0.1:3030")]
    pub bind: SocketAddr,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout: u64,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = DbConfig::from_env().context("database configuration incomplete")?;

    let pool = db::bootstrap(&config)
        .await
        .context("failed to initialize database")?;

    let repo = Arc::new(PgGarmentRepo::new(pool));
    let state = AppState {
        service: Arc::new(InventoryService::new(repo)),
    };

    let server_config = ServerConfig {
        bind_addr: args.bind,
        request_timeout_secs: args.timeout,
    };

    run_server(state, server_config).await.context("server error")?;

    Ok(())
}
