//! Inventory service
//!
//! Pass-through business layer between the HTTP handlers and the
//! repository. It exists to decouple the handler from the repository
//! interface; only creation adds a log line before delegating.

use std::sync::Arc;

use async_trait::async_trait;

use crate::db::repos::{DbError, GarmentRepository};
use crate::models::{Garment, NewGarment, StockComparator};

/// Domain-facing capability set, mirroring the repository.
#[async_trait]
pub trait GarmentService: Send + Sync {
    async fn create_garment(&self, new: &NewGarment) -> Result<(), DbError>;
    async fn garment_by_id(&self, id: i32) -> Result<Garment, DbError>;
    async fn all_garments(&self) -> Result<Vec<Garment>, DbError>;
    async fn garments_with_empty_stock(&self) -> Result<Vec<Garment>, DbError>;
    async fn garments_by_stock(
        &self,
        stock: i32,
        cmp: StockComparator,
    ) -> Result<Vec<Garment>, DbError>;
    async fn update_garment(&self, garment: &Garment) -> Result<(), DbError>;
    async fn delete_garment(&self, id: i32) -> Result<(), DbError>;
}

/// Production service over any [`GarmentRepository`].
pub struct InventoryService {
    repo: Arc<dyn GarmentRepository>,
}

impl InventoryService {
    pub fn new(repo: Arc<dyn GarmentRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl GarmentService for InventoryService {
    async fn create_garment(&self, new: &NewGarment) -> Result<(), DbError> {
        tracing::info!(name = %new.name, "Creating garment");
        self.repo.create(new).await
    }

    async fn garment_by_id(&self, id: i32) -> Result<Garment, DbError> {
        self.repo.get_by_id(id).await
    }

    async fn all_garments(&self) -> Result<Vec<Garment>, DbError> {
        self.repo.list_all().await
    }

    async fn garments_with_empty_stock(&self) -> Result<Vec<Garment>, DbError> {
        self.repo.list_empty_stock().await
    }

    async fn garments_by_stock(
        &self,
        stock: i32,
        cmp: StockComparator,
    ) -> Result<Vec<Garment>, DbError> {
        self.repo.list_by_stock(stock, cmp).await
    }

    async fn update_garment(&self, garment: &Garment) -> Result<(), DbError> {
        self.repo.update(garment).await
    }

    async fn delete_garment(&self, id: i32) -> Result<(), DbError> {
        self.repo.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repos::MemoryGarmentRepo;
    use rust_decimal::Decimal;

    fn service() -> InventoryService {
        InventoryService::new(Arc::new(MemoryGarmentRepo::new()))
    }

    fn sample(stock: i32) -> NewGarment {
        NewGarment {
            name: "Kaos".into(),
            brand: "X".into(),
            color: "Merah".into(),
            size: "L".into(),
            price: Decimal::from(50000),
            stock,
        }
    }

    #[tokio::test]
    async fn create_delegates_to_repository() {
        let svc = service();
        svc.create_garment(&sample(10)).await.unwrap();

        let all = svc.all_garments().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Kaos");
    }

    #[tokio::test]
    async fn lookup_errors_pass_through_unchanged() {
        let svc = service();
        let err = svc.garment_by_id(7).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { id: 7 }));
    }

    #[tokio::test]
    async fn stock_queries_delegate() {
        let svc = service();
        for stock in [0, 5, 10] {
            svc.create_garment(&sample(stock)).await.unwrap();
        }

        let empty = svc.garments_with_empty_stock().await.unwrap();
        assert_eq!(empty.len(), 1);

        let over_four = svc
            .garments_by_stock(4, StockComparator::Greater)
            .await
            .unwrap();
        assert_eq!(over_four.len(), 2);
    }
}
