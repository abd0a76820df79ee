use thiserror::Error;

/// Errors raised when a product payload fails validation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProductError {
    #[error("price must be a finite number, got {0}")]
    NonFinitePrice(f64),
    #[error("price {0:e} is out of range (magnitude must be 0 or between 1e-130 and 1e126)")]
    PriceOutOfRange(f64),
}
