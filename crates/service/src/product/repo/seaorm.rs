use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, EntityTrait, QueryOrder, Set,
};

use models::product::{self, Entity as ProductEntity};

use crate::errors::ServiceError;
use crate::product::domain::Product;
use crate::product::repository::ProductRepository;

/// SeaORM-backed repository implementation.
pub struct SeaOrmProductRepository {
    pub db: DatabaseConnection,
}

fn to_domain(m: product::Model) -> Product {
    Product {
        id: Some(m.id),
        name: m.name,
        description: m.description,
        price: m.price,
        category: m.category,
    }
}

#[async_trait::async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn save(&self, product: Product) -> Result<Product, ServiceError> {
        let is_update = product.id.is_some();
        let am = product::ActiveModel {
            id: match product.id {
                Some(id) => Set(id),
                None => NotSet,
            },
            name: Set(product.name),
            description: Set(product.description),
            price: Set(product.price),
            category: Set(product.category),
        };
        let saved = if is_update {
            am.update(&self.db).await
        } else {
            am.insert(&self.db).await
        }
        .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(to_domain(saved))
    }

    async fn find_all(&self) -> Result<Vec<Product>, ServiceError> {
        let rows = ProductEntity::find()
            .order_by_asc(product::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(rows.into_iter().map(to_domain).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, ServiceError> {
        let found = ProductEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(found.map(to_domain))
    }

    async fn delete(&self, product: Product) -> Result<(), ServiceError> {
        let Some(id) = product.id else { return Ok(()) };
        ProductEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(())
    }
}
