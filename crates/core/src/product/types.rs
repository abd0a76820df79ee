use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A product as stored in the table and returned over HTTP.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl Product {
    /// Creates a product with a freshly generated ID.
    pub fn new(fields: NewProduct) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), fields)
    }

    /// Creates a product with a specific ID (useful for testing).
    pub fn with_id(id: impl Into<String>, fields: NewProduct) -> Self {
        Self {
            id: id.into(),
            name: fields.name,
            description: fields.description,
            price: fields.price,
        }
    }

    /// Applies the supplied fields of a patch, leaving the rest untouched.
    pub fn apply(&mut self, patch: &ProductPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
    }
}

/// Request payload for creating a product. Every field is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// Request payload for updating a product.
///
/// Absent and `null` fields are both treated as "not supplied". Keys other
/// than `name`, `description` and `price` are ignored on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl ProductPatch {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Returns true if no field is supplied.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.price.is_none()
    }

    /// Returns the supplied fields in `name, description, price` order.
    pub fn fields(&self) -> Vec<(ProductField, FieldValue)> {
        let mut fields = Vec::with_capacity(3);

        if let Some(name) = &self.name {
            fields.push((ProductField::Name, FieldValue::Text(name.clone())));
        }
        if let Some(description) = &self.description {
            fields.push((
                ProductField::Description,
                FieldValue::Text(description.clone()),
            ));
        }
        if let Some(price) = self.price {
            fields.push((ProductField::Price, FieldValue::Number(price)));
        }

        fields
    }
}

/// The mutable fields of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductField {
    Name,
    Description,
    Price,
}

impl ProductField {
    pub const ALL: [ProductField; 3] = [
        ProductField::Name,
        ProductField::Description,
        ProductField::Price,
    ];

    /// Returns the stored attribute name for this field.
    pub fn attribute_name(&self) -> &'static str {
        match self {
            ProductField::Name => "name",
            ProductField::Description => "description",
            ProductField::Price => "price",
        }
    }
}

/// A new value for a product field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}
