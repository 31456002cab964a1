//! In-memory repository double
//!
//! Mirrors [`PgGarmentRepo`](super::PgGarmentRepo) semantics for tests that
//! do not need PostgreSQL: ids are assigned monotonically starting at 1,
//! updates and deletes of missing ids are no-ops.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{DbError, GarmentRepository};
use crate::models::{Garment, NewGarment, StockComparator};

#[derive(Default)]
pub struct MemoryGarmentRepo {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    items: Vec<Garment>,
    last_id: i32,
}

impl MemoryGarmentRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with existing rows; ids keep counting past the highest seeded id.
    pub fn with_items(items: Vec<Garment>) -> Self {
        let last_id = items.iter().map(|g| g.id).max().unwrap_or(0);
        Self {
            inner: Mutex::new(Inner { items, last_id }),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().expect("repository mutex poisoned")
    }
}

#[async_trait]
impl GarmentRepository for MemoryGarmentRepo {
    async fn create(&self, new: &NewGarment) -> Result<(), DbError> {
        let mut inner = self.lock();
        inner.last_id += 1;
        let id = inner.last_id;
        inner.items.push(Garment {
            id,
            name: new.name.clone(),
            brand: new.brand.clone(),
            color: new.color.clone(),
            size: new.size.clone(),
            price: new.price,
            stock: new.stock,
        });
        Ok(())
    }

    async fn get_by_id(&self, id: i32) -> Result<Garment, DbError> {
        self.lock()
            .items
            .iter()
            .find(|g| g.id == id)
            .cloned()
            .ok_or(DbError::NotFound { id })
    }

    async fn list_all(&self) -> Result<Vec<Garment>, DbError> {
        Ok(self.lock().items.clone())
    }

    async fn list_empty_stock(&self) -> Result<Vec<Garment>, DbError> {
        Ok(self
            .lock()
            .items
            .iter()
            .filter(|g| g.stock == 0)
            .cloned()
            .collect())
    }

    async fn list_by_stock(
        &self,
        stock: i32,
        cmp: StockComparator,
    ) -> Result<Vec<Garment>, DbError> {
        Ok(self
            .lock()
            .items
            .iter()
            .filter(|g| cmp.matches(g.stock, stock))
            .cloned()
            .collect())
    }

    async fn update(&self, garment: &Garment) -> Result<(), DbError> {
        let mut inner = self.lock();
        if let Some(existing) = inner.items.iter_mut().find(|g| g.id == garment.id) {
            *existing = garment.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), DbError> {
        self.lock().items.retain(|g| g.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn sample(name: &str, stock: i32) -> NewGarment {
        NewGarment {
            name: name.into(),
            brand: "X".into(),
            color: "Merah".into(),
            size: "L".into(),
            price: Decimal::from(50000),
            stock,
        }
    }

    #[tokio::test]
    async fn create_assigns_monotonic_ids() {
        let repo = MemoryGarmentRepo::new();
        repo.create(&sample("a", 1)).await.unwrap();
        repo.create(&sample("b", 2)).await.unwrap();

        let all = repo.list_all().await.unwrap();
        assert_eq!(all[0].id, 1);
        assert_eq!(all[1].id, 2);
    }

    #[tokio::test]
    async fn create_then_fetch_matches_input() {
        let repo = MemoryGarmentRepo::new();
        let new = sample("Kaos", 10);
        repo.create(&new).await.unwrap();

        let fetched = repo.get_by_id(1).await.unwrap();
        assert_eq!(fetched.name, new.name);
        assert_eq!(fetched.brand, new.brand);
        assert_eq!(fetched.color, new.color);
        assert_eq!(fetched.size, new.size);
        assert_eq!(fetched.price, new.price);
        assert_eq!(fetched.stock, new.stock);
    }

    #[tokio::test]
    async fn fetch_missing_id_is_not_found() {
        let repo = MemoryGarmentRepo::new();
        let err = repo.get_by_id(99).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { id: 99 }));
    }

    #[tokio::test]
    async fn stock_condition_filters_exactly() {
        let repo = MemoryGarmentRepo::new();
        for stock in [0, 3, 5, 7] {
            repo.create(&sample("g", stock)).await.unwrap();
        }

        let above = repo.list_by_stock(5, StockComparator::Greater).await.unwrap();
        assert_eq!(above.iter().map(|g| g.stock).collect::<Vec<_>>(), vec![7]);

        let below = repo.list_by_stock(5, StockComparator::Less).await.unwrap();
        assert_eq!(
            below.iter().map(|g| g.stock).collect::<Vec<_>>(),
            vec![0, 3]
        );

        let exact = repo.list_by_stock(5, StockComparator::Equal).await.unwrap();
        assert_eq!(exact.iter().map(|g| g.stock).collect::<Vec<_>>(), vec![5]);
    }

    #[tokio::test]
    async fn empty_stock_equals_stock_zero_condition() {
        let repo = MemoryGarmentRepo::new();
        for stock in [0, 0, 4] {
            repo.create(&sample("g", stock)).await.unwrap();
        }

        let empty = repo.list_empty_stock().await.unwrap();
        let zero = repo.list_by_stock(0, StockComparator::Equal).await.unwrap();
        assert_eq!(empty, zero);
        assert_eq!(empty.len(), 2);
    }

    #[tokio::test]
    async fn update_missing_id_is_a_noop() {
        let repo = MemoryGarmentRepo::new();
        repo.create(&sample("a", 1)).await.unwrap();

        let ghost = Garment {
            id: 42,
            name: "Ghost".into(),
            brand: "None".into(),
            color: "Hitam".into(),
            size: "S".into(),
            price: Decimal::from(1),
            stock: 0,
        };
        repo.update(&ghost).await.unwrap();

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "a");
    }

    #[tokio::test]
    async fn update_overwrites_all_mutable_fields() {
        let repo = MemoryGarmentRepo::new();
        repo.create(&sample("a", 1)).await.unwrap();

        let mut updated = repo.get_by_id(1).await.unwrap();
        updated.name = "b".into();
        updated.stock = 9;
        repo.update(&updated).await.unwrap();

        assert_eq!(repo.get_by_id(1).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let repo = MemoryGarmentRepo::new();
        repo.create(&sample("a", 1)).await.unwrap();

        repo.delete(1).await.unwrap();
        repo.delete(1).await.unwrap();

        assert!(repo.list_all().await.unwrap().is_empty());
    }
}
