//! Schema bootstrap for the inventory table
//!
//! One idempotent statement; there is no migration history to track.

use sqlx::PgPool;

/// Ensure the `baju` table exists.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS baju (
            id SERIAL PRIMARY KEY,
            nama VARCHAR(100),
            brand VARCHAR(100),
            warna VARCHAR(50),
            ukuran VARCHAR(10),
            harga NUMERIC(10, 2),
            stok INT
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Inventory schema ready");
    Ok(())
}
