//! Garment repository
//!
//! Typed CRUD over the `baju` table. Every operation is a single
//! parameterized statement; no transactions, no retries, no batching.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{Garment, NewGarment, StockComparator};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("garment {id} not found")]
    NotFound { id: i32 },
}

/// Capability set over stored garments.
///
/// One production implementation ([`PgGarmentRepo`]) and one in-memory
/// double for tests ([`super::MemoryGarmentRepo`]).
#[async_trait]
pub trait GarmentRepository: Send + Sync {
    /// Insert a new row. The generated id is not returned to the caller.
    async fn create(&self, new: &NewGarment) -> Result<(), DbError>;

    /// Fetch the row matching `id`, or [`DbError::NotFound`].
    async fn get_by_id(&self, id: i32) -> Result<Garment, DbError>;

    /// Every row, order storage-determined.
    async fn list_all(&self) -> Result<Vec<Garment>, DbError>;

    /// Rows with `stok = 0`.
    async fn list_empty_stock(&self) -> Result<Vec<Garment>, DbError>;

    /// Rows satisfying `stok <cmp> stock`.
    async fn list_by_stock(
        &self,
        stock: i32,
        cmp: StockComparator,
    ) -> Result<Vec<Garment>, DbError>;

    /// Overwrite all mutable columns for `garment.id`.
    /// No-op when the id does not exist.
    async fn update(&self, garment: &Garment) -> Result<(), DbError>;

    /// Remove the row matching `id`. No-op when absent.
    async fn delete(&self, id: i32) -> Result<(), DbError>;
}

const SELECT_COLUMNS: &str = "SELECT id, nama, brand, warna, ukuran, harga, stok FROM baju";

/// Production repository backed by a PgPool.
pub struct PgGarmentRepo {
    pool: PgPool,
}

impl PgGarmentRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GarmentRepository for PgGarmentRepo {
    async fn create(&self, new: &NewGarment) -> Result<(), DbError> {
        sqlx::query(
            "INSERT INTO baju (nama, brand, warna, ukuran, harga, stok) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(&new.name)
        .bind(&new.brand)
        .bind(&new.color)
        .bind(&new.size)
        .bind(new.price)
        .bind(new.stock)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_by_id(&self, id: i32) -> Result<Garment, DbError> {
        let sql = format!("{SELECT_COLUMNS} WHERE id = $1");

        sqlx::query_as::<_, Garment>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(DbError::NotFound { id })
    }

    async fn list_all(&self) -> Result<Vec<Garment>, DbError> {
        let items = sqlx::query_as::<_, Garment>(SELECT_COLUMNS)
            .fetch_all(&self.pool)
            .await?;

        Ok(items)
    }

    async fn list_empty_stock(&self) -> Result<Vec<Garment>, DbError> {
        let sql = format!("{SELECT_COLUMNS} WHERE stok = 0");

        let items = sqlx::query_as::<_, Garment>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(items)
    }

    async fn list_by_stock(
        &self,
        stock: i32,
        cmp: StockComparator,
    ) -> Result<Vec<Garment>, DbError> {
        // cmp.sql() is one of three fixed tokens, never client input.
        let sql = format!("{SELECT_COLUMNS} WHERE stok {} $1", cmp.sql());

        let items = sqlx::query_as::<_, Garment>(&sql)
            .bind(stock)
            .fetch_all(&self.pool)
            .await?;

        Ok(items)
    }

    async fn update(&self, garment: &Garment) -> Result<(), DbError> {
        sqlx::query(
            "UPDATE baju SET nama = $1, brand = $2, warna = $3, ukuran = $4, \
             harga = $5, stok = $6 WHERE id = $7",
        )
        .bind(&garment.name)
        .bind(&garment.brand)
        .bind(&garment.color)
        .bind(&garment.size)
        .bind(garment.price)
        .bind(garment.stock)
        .bind(garment.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), DbError> {
        sqlx::query("DELETE FROM baju WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
