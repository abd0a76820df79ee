mod error;
mod http_mapping;
mod traits;

pub use error::{RepositoryError, Result};
pub use http_mapping::repository_error_to_status_code;
pub use traits::ProductRepository;

/// Entity name used in repository errors and log fields.
pub const PRODUCT_ENTITY: &str = "Product";

/// Partition key attribute of the products table.
pub const PRODUCT_KEY_ATTRIBUTE: &str = "id";
