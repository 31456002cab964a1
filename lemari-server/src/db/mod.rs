//! Database layer: startup bootstrap, schema, repositories

pub mod migrations;
pub mod repos;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DbConfig;

/// Pool cap, kept low for a single-service deployment.
const MAX_CONNECTIONS: u32 = 5;

/// Open a pool, verify liveness with a ping, and ensure the schema exists.
///
/// Any failure here is returned to the caller and fatal to startup.
pub async fn bootstrap(config: &DbConfig) -> Result<PgPool, sqlx::Error> {
    tracing::info!(
        host = %config.host,
        port = config.port,
        database = %config.database,
        "Connecting to PostgreSQL"
    );

    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect(&config.connection_url())
        .await?;

    sqlx::query("SELECT 1").execute(&pool).await?;

    migrations::run(&pool).await?;

    Ok(pool)
}
