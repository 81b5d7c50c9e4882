//! Petsheets Rust Client Library
//!
//! A Rust client for the sheet-backed content API of a pet-care community
//! platform: typed row fetching with retry, sheet mutations, and the payment
//! gateway order boundary.

pub mod config;
pub mod content;
pub mod error;
pub mod fetch;
pub mod payments;
pub mod records;
pub mod schema;
pub mod sheets;

use reqwest::Client;

use crate::config::ClientOptions;
use crate::content::ContentClient;
use crate::payments::PaymentsClient;
use crate::sheets::SheetsClient;

/// The main entry point for the petsheets client
pub struct Petsheets {
    /// Base URL of the internal data API
    pub url: String,
    /// HTTP client used for requests
    pub http_client: Client,
    /// Client options
    pub options: ClientOptions,
}

impl Petsheets {
    /// Create a new petsheets client with default options
    ///
    /// # Example
    ///
    /// ```
    /// use petsheets::Petsheets;
    ///
    /// let client = Petsheets::new("https://pets.example.org");
    /// ```
    pub fn new(base_url: &str) -> Self {
        Self::new_with_options(base_url, ClientOptions::default())
    }

    /// Create a new petsheets client with custom options
    ///
    /// # Example
    ///
    /// ```
    /// use petsheets::{config::ClientOptions, Petsheets};
    ///
    /// let options = ClientOptions::default().with_retries(5);
    /// let client = Petsheets::new_with_options("https://pets.example.org", options);
    /// ```
    pub fn new_with_options(base_url: &str, options: ClientOptions) -> Self {
        Self {
            url: base_url.to_string(),
            http_client: Client::new(),
            options,
        }
    }

    /// Create a sheets client for raw row fetches and mutations
    pub fn sheets(&self) -> SheetsClient {
        SheetsClient::new(&self.url, self.http_client.clone(), self.options.clone())
    }

    /// Create a content client for typed collection getters
    pub fn content(&self) -> ContentClient {
        ContentClient::new(self.sheets(), self.options.rows.clone())
    }

    /// Create a payments client for the gateway order boundary
    pub fn payments(&self, key_id: &str, key_secret: &str) -> PaymentsClient {
        PaymentsClient::new(key_id, key_secret, self.http_client.clone())
    }
}

/// A convenience module for common imports
pub mod prelude {
    pub use crate::config::ClientOptions;
    pub use crate::error::Error;
    pub use crate::schema::{IdFallback, RowPolicy};
    pub use crate::Petsheets;
}
