use async_trait::async_trait;

use crate::product::{NewProduct, Product, ProductPatch};

use super::Result;

/// Repository for product operations.
///
/// A missing product is reported as `Ok(None)`, never as an error. Errors are
/// reserved for the store itself failing.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Creates a product with a freshly generated ID and returns it.
    async fn create(&self, fields: NewProduct) -> Result<Product>;

    /// Gets every product in the table, in no particular order.
    async fn get_all(&self) -> Result<Vec<Product>>;

    /// Gets a product by its ID.
    async fn get_by_id(&self, id: &str) -> Result<Option<Product>>;

    /// Applies the supplied fields of `patch` and returns the updated product.
    ///
    /// An empty patch behaves like [`ProductRepository::get_by_id`]. Updating
    /// a missing ID returns `Ok(None)` and creates nothing.
    async fn update(&self, id: &str, patch: ProductPatch) -> Result<Option<Product>>;

    /// Deletes a product by its ID. Deleting a missing ID is not an error.
    async fn delete(&self, id: &str) -> Result<()>;
}
