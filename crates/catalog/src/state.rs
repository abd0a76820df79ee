//! Application state with repository-based storage.
//!
//! Handlers only see the `ProductRepository` trait object; the concrete
//! backend is picked once at startup.

use std::sync::Arc;

use catalog_core::storage::ProductRepository;

use crate::config::{Config, StorageBackend};
use crate::storage::{DynamoDbRepository, InMemoryRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub product_repo: Arc<dyn ProductRepository>,
}

impl AppState {
    /// Creates state around an existing repository.
    pub fn new(product_repo: Arc<dyn ProductRepository>) -> Self {
        Self { product_repo }
    }

    /// Builds the repository for the selected backend.
    pub async fn from_config(config: &Config, backend: StorageBackend) -> Self {
        match backend {
            StorageBackend::Dynamodb => {
                tracing::info!(
                    table = %config.table_name,
                    target = %config.target_display(),
                    "Using DynamoDB storage"
                );
                let repo = DynamoDbRepository::from_config(config).await;
                Self::new(Arc::new(repo))
            }
            StorageBackend::Memory => {
                tracing::warn!("Using in-memory storage, data is lost on restart");
                Self::new(Arc::new(InMemoryRepository::new()))
            }
        }
    }
}

#[cfg(test)]
impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(InMemoryRepository::new()))
    }
}
