//! In-memory storage backend.
//!
//! Stores products in a HashMap wrapped in `Arc<RwLock<_>>`. Used by the
//! router tests and by `--storage memory` for local development.
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::storage::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! ```

mod repository;

pub use repository::InMemoryRepository;
