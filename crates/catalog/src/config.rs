use std::{env, time::Duration};

/// Storage backend selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum StorageBackend {
    /// Amazon DynamoDB (or DynamoDB Local via an endpoint override).
    #[default]
    Dynamodb,
    /// Process-local storage, lost on restart.
    Memory,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the products table (default: "products")
    pub table_name: String,
    /// AWS region (default: "us-east-1")
    pub aws_region: String,
    /// Custom DynamoDB endpoint, e.g. DynamoDB Local (default: none)
    pub dynamodb_endpoint: Option<String>,
    /// Per-operation timeout for store calls in seconds (default: 5)
    pub store_timeout_seconds: u64,
    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TABLE_NAME` - Products table name (default: "products")
    /// - `AWS_REGION` - AWS region (default: "us-east-1")
    /// - `DYNAMODB_ENDPOINT` - Custom endpoint, falls back to `AWS_ENDPOINT_URL`
    /// - `STORE_TIMEOUT_SECONDS` - Store operation timeout (default: 5)
    /// - `REQUEST_TIMEOUT_SECONDS` - HTTP request timeout (default: 10)
    ///
    /// Credentials are resolved by the AWS default provider chain.
    pub fn from_env() -> Self {
        Self {
            table_name: env::var("TABLE_NAME").unwrap_or_else(|_| "products".to_string()),
            aws_region: env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            dynamodb_endpoint: resolve_endpoint(
                env::var("DYNAMODB_ENDPOINT").ok(),
                env::var("AWS_ENDPOINT_URL").ok(),
            ),
            store_timeout_seconds: env::var("STORE_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Get the store operation timeout as a Duration.
    pub fn store_timeout(&self) -> Duration {
        Duration::from_secs(self.store_timeout_seconds)
    }

    /// Get the HTTP request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// Returns a display string for the storage target.
    pub fn target_display(&self) -> String {
        match &self.dynamodb_endpoint {
            Some(url) => format!("Local DynamoDB ({url})"),
            None => format!("AWS DynamoDB (region: {})", self.aws_region),
        }
    }
}

/// Picks the first non-empty endpoint.
fn resolve_endpoint(primary: Option<String>, fallback: Option<String>) -> Option<String> {
    primary
        .filter(|v| !v.trim().is_empty())
        .or_else(|| fallback.filter(|v| !v.trim().is_empty()))
}
