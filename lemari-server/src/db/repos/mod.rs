//! Repository implementations for database access
//!
//! Single-statement operations only: no transactions, no retries, no
//! batching.

pub mod garments;
pub mod memory;

pub use garments::{DbError, GarmentRepository, PgGarmentRepo};
pub use memory::MemoryGarmentRepo;
