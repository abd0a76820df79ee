use super::error::ProductError;
use super::types::{NewProduct, ProductPatch};

/// Smallest non-zero magnitude a stored number may have.
pub const MIN_PRICE_MAGNITUDE: f64 = 1e-130;

/// Prices must stay strictly below this magnitude.
pub const MAX_PRICE_MAGNITUDE: f64 = 1e126;

/// Checks that a price can be stored as a table number.
pub fn validate_price(price: f64) -> Result<(), ProductError> {
    if !price.is_finite() {
        return Err(ProductError::NonFinitePrice(price));
    }

    let magnitude = price.abs();
    if magnitude != 0.0 && !(MIN_PRICE_MAGNITUDE..MAX_PRICE_MAGNITUDE).contains(&magnitude) {
        return Err(ProductError::PriceOutOfRange(price));
    }

    Ok(())
}

/// Validates a product before creation.
pub fn validate_new_product(product: &NewProduct) -> Result<(), ProductError> {
    validate_price(product.price)
}

/// Validates the supplied fields of an update.
pub fn validate_patch(patch: &ProductPatch) -> Result<(), ProductError> {
    patch.price.map_or(Ok(()), validate_price)
}
