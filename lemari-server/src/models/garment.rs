//! Garment entity and stock comparator

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A clothing item as stored in the `baju` table.
///
/// Wire names stay Indonesian for compatibility with existing clients;
/// Rust field names follow the rest of the codebase. `id` is assigned by
/// the database on insert and immutable afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Garment {
    pub id: i32,

    #[serde(rename = "nama")]
    #[sqlx(rename = "nama")]
    pub name: String,

    pub brand: String,

    #[serde(rename = "warna")]
    #[sqlx(rename = "warna")]
    pub color: String,

    #[serde(rename = "ukuran")]
    #[sqlx(rename = "ukuran")]
    pub size: String,

    #[serde(rename = "harga")]
    #[sqlx(rename = "harga")]
    pub price: Decimal,

    #[serde(rename = "stok")]
    #[sqlx(rename = "stok")]
    pub stock: i32,
}

/// Insert payload: everything except the storage-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewGarment {
    #[serde(rename = "nama")]
    pub name: String,

    pub brand: String,

    #[serde(rename = "warna")]
    pub color: String,

    #[serde(rename = "ukuran")]
    pub size: String,

    #[serde(rename = "harga")]
    pub price: Decimal,

    #[serde(rename = "stok")]
    pub stock: i32,
}

/// Comparator for stock-filtered queries (`stok > n`, `stok < n`, `stok = n`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockComparator {
    Greater,
    Less,
    Equal,
}

impl StockComparator {
    /// Parse the wire token (`>`, `<`, `=`).
    ///
    /// Anything else is rejected here, before a query is built; the
    /// repository only ever sees a valid comparator.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            ">" => Some(Self::Greater),
            "<" => Some(Self::Less),
            "=" => Some(Self::Equal),
            _ => None,
        }
    }

    /// SQL operator for the predicate. One of three fixed tokens, never
    /// client input.
    pub fn sql(&self) -> &'static str {
        match self {
            Self::Greater => ">",
            Self::Less => "<",
            Self::Equal => "=",
        }
    }

    /// Evaluate `stock <cmp> value` in memory.
    pub fn matches(&self, stock: i32, value: i32) -> bool {
        match self {
            Self::Greater => stock > value,
            Self::Less => stock < value,
            Self::Equal => stock == value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparator_parses_wire_tokens() {
        assert_eq!(StockComparator::parse(">"), Some(StockComparator::Greater));
        assert_eq!(StockComparator::parse("<"), Some(StockComparator::Less));
        assert_eq!(StockComparator::parse("="), Some(StockComparator::Equal));
    }

    #[test]
    fn comparator_rejects_unknown_tokens() {
        assert_eq!(StockComparator::parse(">="), None);
        assert_eq!(StockComparator::parse("=="), None);
        assert_eq!(StockComparator::parse(""), None);
        assert_eq!(StockComparator::parse("empty"), None);
    }

    #[test]
    fn comparator_predicates() {
        assert!(StockComparator::Greater.matches(6, 5));
        assert!(!StockComparator::Greater.matches(5, 5));
        assert!(StockComparator::Less.matches(4, 5));
        assert!(StockComparator::Equal.matches(5, 5));
        assert!(!StockComparator::Equal.matches(6, 5));
    }

    #[test]
    fn garment_wire_names_are_indonesian() {
        let garment = Garment {
            id: 1,
            name: "Kaos".into(),
            brand: "X".into(),
            color: "Merah".into(),
            size: "L".into(),
            price: Decimal::from(50000),
            stock: 10,
        };

        let value = serde_json::to_value(&garment).unwrap();
        assert_eq!(value["nama"], "Kaos");
        assert_eq!(value["warna"], "Merah");
        assert_eq!(value["ukuran"], "L");
        assert_eq!(value["stok"], 10);
    }

    #[test]
    fn new_garment_decodes_numeric_price() {
        let body = r#"{"nama":"Kaos","brand":"X","warna":"Merah","ukuran":"L","harga":50000,"stok":10}"#;
        let new: NewGarment = serde_json::from_str(body).unwrap();
        assert_eq!(new.price, Decimal::from(50000));
        assert_eq!(new.stock, 10);
    }
}
