use std::sync::Arc;

use tracing::{info, instrument};

use super::domain::Product;
use super::repository::ProductRepository;
use crate::errors::ServiceError;

/// Product business service independent of web framework.
///
/// Orchestrates the repository: create, list, find-or-fail lookups, and
/// update-by-overwrite of the four data fields.
pub struct ProductService<R: ProductRepository> {
    repo: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Persist a new product and return it with the assigned id.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::product::domain::Product;
    /// use service::product::repository::memory::InMemoryProductRepository;
    /// use service::product::ProductService;
    /// let svc = ProductService::new(Arc::new(InMemoryProductRepository::default()));
    /// let input = Product { id: None, name: "Laptop".into(), description: "Machine Lenovo".into(), price: 10000.0, category: "Electronics".into() };
    /// let created = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert!(created.id.is_some());
    /// assert_eq!(created.name, "Laptop");
    /// ```
    #[instrument(skip(self, product), fields(name = %product.name, category = %product.category))]
    pub async fn create(&self, product: Product) -> Result<Product, ServiceError> {
        let created = self.repo.save(product).await?;
        info!(id = ?created.id, "product_created");
        Ok(created)
    }

    /// All products in creation order; empty when none exist.
    pub async fn list(&self) -> Result<Vec<Product>, ServiceError> {
        self.repo.find_all().await
    }

    pub async fn get(&self, id: i32) -> Result<Product, ServiceError> {
        self.find_product(id).await
    }

    /// Overwrite `name`, `description`, `price`, and `category` of the stored
    /// product with the values in `patch`. The stored id wins; an id inside
    /// `patch` is ignored.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i32, patch: Product) -> Result<Product, ServiceError> {
        let mut existing = self.find_product(id).await?;
        existing.name = patch.name;
        existing.description = patch.description;
        existing.price = patch.price;
        existing.category = patch.category;
        let updated = self.repo.save(existing).await?;
        info!(id, "product_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let existing = self.find_product(id).await?;
        self.repo.delete(existing).await?;
        info!(id, "product_deleted");
        Ok(())
    }

    // Centralized lookup shared by get/update/delete; the only producer of
    // the NotFound error.
    async fn find_product(&self, id: i32) -> Result<Product, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(format!("product {}", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::repository::memory::InMemoryProductRepository;

    fn laptop() -> Product {
        Product {
            id: None,
            name: "Laptop".into(),
            description: "Machine Lenovo".into(),
            price: 10000.0,
            category: "Electronics".into(),
        }
    }

    fn svc() -> ProductService<InMemoryProductRepository> {
        ProductService::new(Arc::new(InMemoryProductRepository::default()))
    }

    #[tokio::test]
    async fn create_assigns_id_and_echoes_fields() {
        let svc = svc();
        let created = svc.create(laptop()).await.unwrap();
        assert!(created.id.is_some());
        assert_eq!(created.name, "Laptop");
        assert_eq!(created.description, "Machine Lenovo");
        assert_eq!(created.price, 10000.0);
        assert_eq!(created.category, "Electronics");
    }

    #[tokio::test]
    async fn list_is_empty_before_any_create() {
        let svc = svc();
        assert!(svc.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_preserves_creation_order() {
        let svc = svc();
        for name in ["Laptop", "Mobile Samsung A-12", "Mobile Iphone-15"] {
            svc.create(Product { name: name.into(), ..laptop() }).await.unwrap();
        }
        let all = svc.list().await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].name, "Laptop");
        assert_eq!(all[1].name, "Mobile Samsung A-12");
        assert_eq!(all[2].name, "Mobile Iphone-15");
    }

    #[tokio::test]
    async fn get_missing_id_is_not_found() {
        let svc = svc();
        let err = svc.get(999).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_overwrites_all_fields_and_keeps_id() {
        let svc = svc();
        let created = svc.create(laptop()).await.unwrap();
        let id = created.id.unwrap();

        let patch = Product {
            id: None,
            name: "Iphone-15 Pro".into(),
            description: "Apple Iphone 15".into(),
            price: 150000.0,
            category: "Electronics".into(),
        };
        let updated = svc.update(id, patch).await.unwrap();
        assert_eq!(updated.id, Some(id));
        assert_eq!(updated.name, "Iphone-15 Pro");
        assert_eq!(updated.description, "Apple Iphone 15");
        assert_eq!(updated.price, 150000.0);

        let fetched = svc.get(id).await.unwrap();
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn update_ignores_id_inside_patch() {
        let svc = svc();
        let id = svc.create(laptop()).await.unwrap().id.unwrap();
        let patch = Product { id: Some(424242), ..laptop() };
        let updated = svc.update(id, patch).await.unwrap();
        assert_eq!(updated.id, Some(id));
    }

    #[tokio::test]
    async fn update_missing_id_is_not_found() {
        let svc = svc();
        let err = svc.update(999, laptop()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let svc = svc();
        let id = svc.create(laptop()).await.unwrap().id.unwrap();
        svc.delete(id).await.unwrap();
        assert!(matches!(svc.get(id).await.unwrap_err(), ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_missing_id_is_not_found_every_time() {
        let svc = svc();
        for _ in 0..3 {
            let err = svc.delete(999).await.unwrap_err();
            assert!(matches!(err, ServiceError::NotFound(_)));
        }
        // failed deletes leave no state behind
        assert!(svc.list().await.unwrap().is_empty());
    }
}
