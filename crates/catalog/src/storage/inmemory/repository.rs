//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use catalog_core::product::{NewProduct, Product, ProductPatch};
use catalog_core::storage::{ProductRepository, Result};

/// In-memory product store.
///
/// Uses a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    products: Arc<RwLock<HashMap<String, Product>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with the given products.
    #[cfg(test)]
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let map = products
            .into_iter()
            .map(|product| (product.id.clone(), product))
            .collect();

        Self {
            products: Arc::new(RwLock::new(map)),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryRepository {
    async fn create(&self, new_product: NewProduct) -> Result<Product> {
        let product = Product::new(new_product);
        let mut products = self.products.write().await;
        products.insert(product.id.clone(), product.clone());
        Ok(product)
    }

    async fn get_all(&self) -> Result<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products.values().cloned().collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(id).cloned())
    }

    async fn update(&self, id: &str, patch: ProductPatch) -> Result<Option<Product>> {
        // Lookup and write happen under one lock so a concurrent delete cannot
        // resurrect the product.
        let mut products = self.products.write().await;
        Ok(products.get_mut(id).map(|product| {
            product.apply(&patch);
            product.clone()
        }))
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut products = self.products.write().await;
        products.remove(id);
        Ok(())
    }
}
