//! DynamoDB repository implementation.
//!
//! Implements `ProductRepository` from `catalog_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_config::{timeout::TimeoutConfig, BehaviorVersion, Region};
use aws_sdk_dynamodb::types::ReturnValue;
use aws_sdk_dynamodb::Client;

use catalog_core::product::{NewProduct, Product, ProductPatch, UpdateExpression};
use catalog_core::storage::{ProductRepository, RepositoryError, Result, PRODUCT_ENTITY};

use super::conversions::{
    field_value_to_attribute, item_to_product, product_key, product_to_item, ID_ATTRIBUTE,
    KEY_PLACEHOLDER,
};
use super::error::{
    map_delete_item_error, map_get_item_error, map_put_item_error, map_scan_error,
    map_update_item_error,
};
use crate::config::Config;

/// DynamoDB-based product repository.
#[derive(Debug, Clone)]
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a repository from application configuration.
    ///
    /// Uses the AWS SDK default credential chain. When an endpoint override is
    /// configured (DynamoDB Local) it is applied to the client.
    pub async fn from_config(config: &Config) -> Self {
        let timeouts = TimeoutConfig::builder()
            .operation_timeout(config.store_timeout())
            .build();

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.aws_region.clone()))
            .timeout_config(timeouts);

        if let Some(endpoint) = &config.dynamodb_endpoint {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;
        Self::new(Client::new(&sdk_config), config.table_name.clone())
    }

    async fn apply_update(&self, id: &str, update: &UpdateExpression) -> Result<Option<Product>> {
        let mut request = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key(ID_ATTRIBUTE, product_key(id))
            .update_expression(update.expression())
            .condition_expression(format!("attribute_exists({KEY_PLACEHOLDER})"))
            .expression_attribute_names(KEY_PLACEHOLDER, ID_ATTRIBUTE)
            .return_values(ReturnValue::AllNew);

        for (placeholder, name) in update.attribute_names() {
            request = request.expression_attribute_names(placeholder, name);
        }
        for (placeholder, value) in update.attribute_values() {
            request =
                request.expression_attribute_values(placeholder, field_value_to_attribute(&value));
        }

        let result = match request.send().await {
            Ok(output) => output,
            Err(e) => {
                return match map_update_item_error(e, PRODUCT_ENTITY, id) {
                    RepositoryError::NotFound { .. } => Ok(None),
                    err => Err(err),
                };
            }
        };

        match result.attributes {
            Some(item) => Ok(Some(item_to_product(&item)?)),
            None => Err(RepositoryError::InvalidData(
                "UpdateItem returned no attributes".to_string(),
            )),
        }
    }
}

#[async_trait]
impl ProductRepository for DynamoDbRepository {
    async fn create(&self, new_product: NewProduct) -> Result<Product> {
        let product = Product::new(new_product);

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(product_to_item(&product)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        tracing::debug!(id = %product.id, "created product");
        Ok(product)
    }

    async fn get_all(&self) -> Result<Vec<Product>> {
        let result = self
            .client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(map_scan_error)?;

        if result.last_evaluated_key.is_some() {
            tracing::warn!(
                table = %self.table_name,
                "scan result truncated at one page, remaining products not returned"
            );
        }

        let items = result.items.unwrap_or_default();
        items.iter().map(item_to_product).collect()
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Product>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(ID_ATTRIBUTE, product_key(id))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_product(&item)?)),
            None => Ok(None),
        }
    }

    async fn update(&self, id: &str, patch: ProductPatch) -> Result<Option<Product>> {
        match UpdateExpression::from_patch(&patch) {
            Some(update) => {
                tracing::debug!(id, expression = %update.expression(), "updating product");
                self.apply_update(id, &update).await
            }
            None => self.get_by_id(id).await,
        }
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(ID_ATTRIBUTE, product_key(id))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        tracing::debug!(id, "deleted product");
        Ok(())
    }
}
