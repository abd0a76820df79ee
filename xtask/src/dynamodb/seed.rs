//! Seed command implementation.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::{AttributeValue, PutRequest, WriteRequest};
use aws_sdk_dynamodb::Client;
use catalog_core::product::{NewProduct, Product, ProductField};
use catalog_core::storage::PRODUCT_KEY_ATTRIBUTE;

use super::error::{DynamodbError, Result};

/// BatchWriteItem accepts at most 25 requests.
const BATCH_SIZE: usize = 25;

const SAMPLE_PRODUCTS: [(&str, &str, f64); 8] = [
    ("Widget", "A general purpose widget", 9.99),
    ("Gadget", "A gadget with two buttons", 24.5),
    ("Desk Lamp", "LED lamp with adjustable arm", 39.0),
    ("Notebook", "A5 dotted notebook, 120 pages", 7.25),
    ("Headphones", "Over-ear wireless headphones", 149.99),
    ("Coffee Mug", "Ceramic mug, 350 ml", 12.0),
    ("Backpack", "Water resistant 20 l backpack", 64.9),
    ("USB Cable", "USB-C to USB-C, 1 m", 8.5),
];

/// Generate sample products.
///
/// Names repeat with a numeric suffix once the sample list is exhausted.
pub fn generate_seed_products(count: u32) -> Vec<Product> {
    (0..count as usize)
        .map(|i| {
            let (name, description, price) = SAMPLE_PRODUCTS[i % SAMPLE_PRODUCTS.len()];
            let round = i / SAMPLE_PRODUCTS.len();
            let name = if round == 0 {
                name.to_string()
            } else {
                format!("{} {}", name, round + 1)
            };

            Product::new(NewProduct {
                name,
                description: description.to_string(),
                price,
            })
        })
        .collect()
}

/// Same attribute layout the server writes: the key and text fields as S, `price` as N.
fn product_to_item(product: &Product) -> HashMap<String, AttributeValue> {
    let attribute = |field: ProductField| field.attribute_name().to_string();

    HashMap::from([
        (
            PRODUCT_KEY_ATTRIBUTE.to_string(),
            AttributeValue::S(product.id.clone()),
        ),
        (
            attribute(ProductField::Name),
            AttributeValue::S(product.name.clone()),
        ),
        (
            attribute(ProductField::Description),
            AttributeValue::S(product.description.clone()),
        ),
        (
            attribute(ProductField::Price),
            AttributeValue::N(product.price.to_string()),
        ),
    ])
}

/// Insert products with BatchWriteItem, returning how many were written.
pub async fn seed_products(client: &Client, table_name: &str, products: &[Product]) -> Result<u32> {
    let mut inserted = 0;

    for chunk in products.chunks(BATCH_SIZE) {
        let write_requests = chunk
            .iter()
            .map(|product| {
                PutRequest::builder()
                    .set_item(Some(product_to_item(product)))
                    .build()
                    .map(|put| WriteRequest::builder().put_request(put).build())
                    .map_err(DynamodbError::sdk)
            })
            .collect::<Result<Vec<_>>>()?;

        let output = client
            .batch_write_item()
            .request_items(table_name, write_requests)
            .send()
            .await
            .map_err(DynamodbError::sdk)?;

        let unprocessed = output
            .unprocessed_items()
            .and_then(|items| items.get(table_name))
            .map_or(0, Vec::len);

        inserted += (chunk.len() - unprocessed) as u32;
    }

    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_count() {
        assert_eq!(generate_seed_products(0).len(), 0);
        assert_eq!(generate_seed_products(3).len(), 3);
        assert_eq!(generate_seed_products(30).len(), 30);
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let products = generate_seed_products(40);
        let ids: HashSet<&str> = products.iter().map(|p| p.id.as_str()).collect();

        assert_eq!(ids.len(), 40);
    }

    #[test]
    fn test_names_get_suffix_after_first_round() {
        let products = generate_seed_products(10);

        assert_eq!(products[0].name, "Widget");
        assert_eq!(products[8].name, "Widget 2");
        assert_eq!(products[9].name, "Gadget 2");
        assert_eq!(products[9].price, 24.5);
    }

    #[test]
    fn test_item_layout() {
        let product = Product::with_id(
            "p-1",
            NewProduct {
                name: "Widget".to_string(),
                description: "A widget".to_string(),
                price: 9.99,
            },
        );

        let item = product_to_item(&product);
        assert_eq!(item.len(), 4);
        assert_eq!(item["id"], AttributeValue::S("p-1".to_string()));
        assert_eq!(item["price"], AttributeValue::N("9.99".to_string()));
    }

    #[test]
    fn test_item_keys_follow_product_fields() {
        let item = product_to_item(&generate_seed_products(1)[0]);

        assert!(item.contains_key(PRODUCT_KEY_ATTRIBUTE));
        for field in ProductField::ALL {
            assert!(item.contains_key(field.attribute_name()), "{field:?}");
        }
    }
}
