//! Storage backend implementations.
//!
//! Concrete implementations of `ProductRepository` from
//! `catalog_core::storage`. The backend is chosen at startup with
//! `--storage` / `STORAGE_BACKEND`.
//!
//! - `dynamodb` (default): AWS DynamoDB via `aws-sdk-dynamodb`
//! - `memory`: process-local HashMap, lost on restart

pub mod dynamodb;
pub mod inmemory;

pub use dynamodb::DynamoDbRepository;
pub use inmemory::InMemoryRepository;
