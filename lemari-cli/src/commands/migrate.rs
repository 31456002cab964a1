//! Schema bootstrap command
//!
//! Runs the same pool + ping + ensure-table sequence the server performs at
//! startup, then exits. Useful for provisioning before first deploy.

use anyhow::{Context, Result};

use lemari_server::{db, DbConfig};

pub async fn run_migrate() -> Result<()> {
    let config = DbConfig::from_env().context("database configuration incomplete")?;

    let pool = db::bootstrap(&config)
        .await
        .context("failed to initialize database")?;
    pool.close().await;

    tracing::info!(database = %config.database, "Schema ready");
    Ok(())
}
