//! Table configuration types (Functional Core - pure data).

use catalog_core::storage::PRODUCT_KEY_ATTRIBUTE;

/// Table schema configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub table_name: String,
    pub partition_key: KeyAttribute,
    pub billing_mode: BillingMode,
}

/// A key attribute definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAttribute {
    pub name: String,
    pub attribute_type: AttributeType,
}

/// DynamoDB attribute types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    String,
}

impl AttributeType {
    /// Short DynamoDB notation (`S`).
    pub fn code(&self) -> &'static str {
        match self {
            AttributeType::String => "S",
        }
    }
}

/// Billing mode for the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingMode {
    PayPerRequest,
}

impl TableConfig {
    /// Sets the table name.
    pub fn with_table_name(mut self, name: &str) -> Self {
        self.table_name = name.to_string();
        self
    }
}

/// Returns the canonical products table configuration.
///
/// Products are keyed by their string `id` alone: no sort key and no
/// secondary indexes.
pub fn products_table_config() -> TableConfig {
    TableConfig {
        table_name: "products".to_string(),
        partition_key: KeyAttribute {
            name: PRODUCT_KEY_ATTRIBUTE.to_string(),
            attribute_type: AttributeType::String,
        },
        billing_mode: BillingMode::PayPerRequest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_products_table_config() {
        let config = products_table_config();

        assert_eq!(config.table_name, "products");
        assert_eq!(config.partition_key.name, "id");
        assert_eq!(config.partition_key.attribute_type.code(), "S");
        assert_eq!(config.billing_mode, BillingMode::PayPerRequest);
    }

    #[test]
    fn test_with_table_name_keeps_schema() {
        let config = products_table_config().with_table_name("products-test");

        assert_eq!(config.table_name, "products-test");
        assert_eq!(config.partition_key, products_table_config().partition_key);
    }
}
