//! DynamoDB storage backend implementation.
//!
//! Single-table layout keyed by the product `id` (string partition key, no
//! sort key).

mod conversions;
mod error;
mod repository;

pub use repository::DynamoDbRepository;
