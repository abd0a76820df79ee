//! Error types for DynamoDB operations.

use aws_sdk_dynamodb::error::DisplayErrorContext;
use thiserror::Error;

/// Result type alias for dynamodb module.
pub type Result<T> = std::result::Result<T, DynamodbError>;

/// Errors that can occur during DynamoDB operations.
#[derive(Error, Debug)]
pub enum DynamodbError {
    #[error("AWS SDK error: {0}")]
    AwsSdk(String),

    #[error("Table '{table_name}' not found")]
    TableNotFound { table_name: String },

    #[error("Table '{table_name}' is keyed by '{found}', expected '{expected}'")]
    KeyMismatch {
        table_name: String,
        expected: String,
        found: String,
    },

    #[error("Table '{table_name}' is {status} and cannot be used")]
    TableUnusable { table_name: String, status: String },

    #[error("Operation cancelled by user")]
    UserCancelled,

    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Timeout waiting for table '{0}'")]
    TableTimeout(String),
}

impl DynamodbError {
    /// Wraps an SDK error keeping its full source chain in the message.
    pub fn sdk(err: impl std::error::Error) -> Self {
        Self::AwsSdk(DisplayErrorContext(err).to_string())
    }
}
