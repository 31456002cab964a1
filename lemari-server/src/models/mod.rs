//! Domain models

pub mod garment;

pub use garment::{Garment, NewGarment, StockComparator};
