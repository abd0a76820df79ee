//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and domain types.
//! These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use catalog_core::product::{FieldValue, Product, ProductField};
use catalog_core::storage::{RepositoryError, PRODUCT_KEY_ATTRIBUTE};

pub const ID_ATTRIBUTE: &str = PRODUCT_KEY_ATTRIBUTE;

/// Placeholder for the partition key in condition expressions.
///
/// Field placeholders are derived from field names, none of which is `pk`.
pub const KEY_PLACEHOLDER: &str = "#pk";

/// Build the primary key attribute for a product ID.
pub fn product_key(id: &str) -> AttributeValue {
    AttributeValue::S(id.to_string())
}

/// Convert a Product to DynamoDB item.
pub fn product_to_item(product: &Product) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    item.insert(ID_ATTRIBUTE.to_string(), product_key(&product.id));
    item.insert(
        ProductField::Name.attribute_name().to_string(),
        AttributeValue::S(product.name.clone()),
    );
    item.insert(
        ProductField::Description.attribute_name().to_string(),
        AttributeValue::S(product.description.clone()),
    );
    item.insert(
        ProductField::Price.attribute_name().to_string(),
        number_attribute(product.price),
    );

    item
}

/// Convert a DynamoDB item to Product.
pub fn item_to_product(item: &HashMap<String, AttributeValue>) -> Result<Product, RepositoryError> {
    Ok(Product {
        id: get_string(item, ID_ATTRIBUTE)?,
        name: get_string(item, ProductField::Name.attribute_name())?,
        description: get_string(item, ProductField::Description.attribute_name())?,
        price: get_number(item, ProductField::Price.attribute_name())?,
    })
}

/// Convert a field value bound in an update expression to an attribute.
pub fn field_value_to_attribute(value: &FieldValue) -> AttributeValue {
    match value {
        FieldValue::Text(s) => AttributeValue::S(s.clone()),
        FieldValue::Number(n) => number_attribute(*n),
    }
}

fn number_attribute(n: f64) -> AttributeValue {
    AttributeValue::N(n.to_string())
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get a required string attribute.
fn get_string(item: &HashMap<String, AttributeValue>, key: &str) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get a required number attribute.
fn get_number(item: &HashMap<String, AttributeValue>, key: &str) -> Result<f64, RepositoryError> {
    let raw = item
        .get(key)
        .and_then(|v| v.as_n().ok())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))?;

    raw.parse::<f64>()
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid number {}: {}", key, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> Product {
        Product {
            id: "550e8400-e29b-41d4-a716-446655440001".to_string(),
            name: "Widget".to_string(),
            description: "A widget".to_string(),
            price: 9.99,
        }
    }

    #[test]
    fn test_product_round_trip() {
        let product = sample_product();
        let item = product_to_item(&product);
        let parsed = item_to_product(&item).unwrap();

        assert_eq!(product, parsed);
    }

    #[test]
    fn test_product_item_attributes() {
        let item = product_to_item(&sample_product());

        assert_eq!(item.len(), 4);
        assert_eq!(
            item.get("id").unwrap().as_s().unwrap(),
            "550e8400-e29b-41d4-a716-446655440001"
        );
        assert_eq!(item.get("name").unwrap().as_s().unwrap(), "Widget");
        assert_eq!(item.get("price").unwrap().as_n().unwrap(), "9.99");
    }

    #[test]
    fn test_whole_prices_are_stored_as_numbers() {
        let mut product = sample_product();
        product.price = 12.0;

        let item = product_to_item(&product);
        assert_eq!(item.get("price").unwrap().as_n().unwrap(), "12");
        assert_eq!(item_to_product(&item).unwrap().price, 12.0);
    }

    #[test]
    fn test_missing_field_is_invalid_data() {
        let mut item = product_to_item(&sample_product());
        item.remove("description");

        assert_eq!(
            item_to_product(&item).unwrap_err(),
            RepositoryError::InvalidData("Missing or invalid field: description".to_string())
        );
    }

    #[test]
    fn test_price_stored_as_string_is_invalid_data() {
        let mut item = product_to_item(&sample_product());
        item.insert("price".to_string(), AttributeValue::S("9.99".to_string()));

        assert!(matches!(
            item_to_product(&item),
            Err(RepositoryError::InvalidData(_))
        ));
    }

    #[test]
    fn test_unparsable_price_is_invalid_data() {
        let mut item = product_to_item(&sample_product());
        item.insert("price".to_string(), AttributeValue::N("cheap".to_string()));

        assert!(matches!(
            item_to_product(&item),
            Err(RepositoryError::InvalidData(_))
        ));
    }

    #[test]
    fn test_field_value_to_attribute() {
        assert_eq!(
            field_value_to_attribute(&FieldValue::Text("X".to_string())),
            AttributeValue::S("X".to_string())
        );
        assert_eq!(
            field_value_to_attribute(&FieldValue::Number(12.5)),
            AttributeValue::N("12.5".to_string())
        );
    }

    #[test]
    fn test_key_placeholder_does_not_collide_with_fields() {
        for field in ProductField::ALL {
            assert_ne!(format!("#{}", field.attribute_name()), KEY_PLACEHOLDER);
        }
    }
}
