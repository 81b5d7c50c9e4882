//! Error handling for the petsheets client

use std::fmt;
use thiserror::Error;

/// Unified error type for the petsheets client
#[derive(Error, Debug)]
pub enum Error {
    /// Network or HTTP related errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing errors
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Data API errors (non-2xx status or a falsy success envelope)
    #[error("API error: {0}")]
    Api(String),

    /// Row decoding errors (only raised in strict mode)
    #[error("Row error: {0}")]
    Row(String),

    /// Payment gateway errors
    #[error("Payment error: {0}")]
    Payment(String),
}

impl Error {
    /// Create a new data API error
    pub fn api<T: fmt::Display>(msg: T) -> Self {
        Error::Api(msg.to_string())
    }

    /// Create a new row decoding error
    pub fn row<T: fmt::Display>(msg: T) -> Self {
        Error::Row(msg.to_string())
    }

    /// Create a new payment gateway error
    pub fn payment<T: fmt::Display>(msg: T) -> Self {
        Error::Payment(msg.to_string())
    }
}
