use async_trait::async_trait;

use super::domain::Product;
use crate::errors::ServiceError;

/// Repository abstraction for product persistence.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist a product. Inserts when `product.id` is `None` (the storage
    /// layer assigns the id) and updates the existing row otherwise. Callers
    /// only pass `Some` ids obtained from a prior lookup.
    async fn save(&self, product: Product) -> Result<Product, ServiceError>;

    /// All products in creation order (ascending id).
    async fn find_all(&self) -> Result<Vec<Product>, ServiceError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, ServiceError>;

    async fn delete(&self, product: Product) -> Result<(), ServiceError>;
}

/// In-memory repository for tests, doc examples, and database-free runs
pub mod memory {
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    pub struct InMemoryProductRepository {
        inner: Mutex<Inner>,
    }

    #[derive(Default)]
    struct Inner {
        rows: BTreeMap<i32, Product>, // keyed by id; ids ascend with creation
        next_id: i32,
    }

    #[async_trait]
    impl ProductRepository for InMemoryProductRepository {
        async fn save(&self, mut product: Product) -> Result<Product, ServiceError> {
            let mut inner = self.inner.lock().unwrap();
            let id = match product.id {
                Some(id) => id,
                None => {
                    inner.next_id += 1;
                    inner.next_id
                }
            };
            product.id = Some(id);
            inner.rows.insert(id, product.clone());
            Ok(product)
        }

        async fn find_all(&self) -> Result<Vec<Product>, ServiceError> {
            let inner = self.inner.lock().unwrap();
            Ok(inner.rows.values().cloned().collect())
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<Product>, ServiceError> {
            let inner = self.inner.lock().unwrap();
            Ok(inner.rows.get(&id).cloned())
        }

        async fn delete(&self, product: Product) -> Result<(), ServiceError> {
            let mut inner = self.inner.lock().unwrap();
            if let Some(id) = product.id {
                inner.rows.remove(&id);
            }
            Ok(())
        }
    }
}
