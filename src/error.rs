use thiserror::Error;
use validator::ValidationErrors;

/// Errors raised by the document store and its client handle.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    #[error("Invalid document id: {0}")]
    InvalidId(String),
    #[error("Document store unavailable: {0}")]
    Unavailable(String),
    #[error("Document serialization error: {0}")]
    Serialization(String),
    #[error("Document persistence error: {0}")]
    Persistence(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(error: serde_json::Error) -> Self {
        StoreError::Serialization(error.to_string())
    }
}

/// Errors that can occur during menu operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    #[error("Pizza validation error: {0}")]
    Validation(ValidationErrors),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors that can occur while placing or reading orders.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order must contain at least one item")]
    EmptyOrder,
    #[error("Invalid pizza_id: {0}")]
    InvalidPizzaId(String),
    #[error("Pizza not found: {0}")]
    PizzaNotFound(String),
    #[error("Order validation error: {0}")]
    Validation(ValidationErrors),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors raised while loading configuration from the environment.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigurationError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
    #[error("Unsupported DATABASE_URL: {0} (expected memory:// or file://<path>)")]
    UnsupportedDatabaseUrl(String),
}
