mod error;
mod types;
mod update;
mod validation;

pub use error::ProductError;
pub use types::{FieldValue, NewProduct, Product, ProductField, ProductPatch};
pub use update::{SetClause, UpdateExpression, NAME_PLACEHOLDER_PREFIX, VALUE_PLACEHOLDER_PREFIX};
pub use validation::{
    validate_new_product, validate_patch, validate_price, MAX_PRICE_MAGNITUDE,
    MIN_PRICE_MAGNITUDE,
};
