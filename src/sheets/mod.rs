//! Sheet fetch and mutation operations against the internal data API
//!
//! Fetches retry transient failures on an exponential backoff schedule.
//! Mutations deliberately do not retry: appends and updates are not
//! idempotent against a spreadsheet, so a failed attempt surfaces to the
//! caller as-is.

mod types;

pub use types::*;

use reqwest::Client;
use serde_json::Value;
use std::collections::HashMap;
use tokio::time::sleep;

use crate::config::ClientOptions;
use crate::error::Error;
use crate::fetch::Fetch;

/// Client for row-level operations on a sheet-backed collection
pub struct SheetsClient {
    /// Base URL of the internal data API
    base_url: String,

    /// HTTP client
    client: Client,

    /// Client options
    options: ClientOptions,
}

impl SheetsClient {
    /// Create a new SheetsClient
    pub(crate) fn new(base_url: &str, client: Client, options: ClientOptions) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            options,
        }
    }

    fn data_url(&self) -> String {
        format!("{}/api/data", self.base_url)
    }

    /// Fetch every row of the named sheet, using the configured retry budget
    ///
    /// The result includes the header row as row 0; callers skip it before
    /// decoding.
    pub async fn fetch_rows(&self, sheet: &str) -> Result<Vec<Vec<String>>, Error> {
        self.fetch_rows_with_retries(sheet, self.options.retries).await
    }

    /// Fetch every row of the named sheet with an explicit retry budget
    ///
    /// Attempt `n` (0-indexed) that fails waits `2^n` backoff base units
    /// before the next attempt. A non-2xx status and a falsy `success`
    /// envelope are both retryable. Once the budget is exhausted the last
    /// error is returned; there are no partial results.
    pub async fn fetch_rows_with_retries(
        &self,
        sheet: &str,
        retries: u32,
    ) -> Result<Vec<Vec<String>>, Error> {
        let mut last_error = Error::api(format!("no fetch attempts made for sheet {}", sheet));

        for attempt in 0..retries {
            match self.try_fetch(sheet).await {
                Ok(rows) => return Ok(rows),
                Err(error) => {
                    last_error = error;
                    if attempt + 1 < retries {
                        sleep(self.options.backoff_base * 2u32.pow(attempt)).await;
                    }
                }
            }
        }

        Err(last_error)
    }

    async fn try_fetch(&self, sheet: &str) -> Result<Vec<Vec<String>>, Error> {
        let mut params = HashMap::new();
        params.insert("sheet".to_string(), sheet.to_string());

        let envelope: SheetEnvelope = Fetch::get(&self.client, &self.data_url())
            .query(params)
            .timeout(self.options.request_timeout)
            .execute()
            .await?;

        if !envelope.success {
            return Err(Error::api(
                envelope
                    .error
                    .unwrap_or_else(|| "Failed to fetch data".to_string()),
            ));
        }

        Ok(envelope.data)
    }

    /// Append one row to the named sheet
    ///
    /// Returns the API's raw JSON response. A 2xx response whose `success`
    /// field is falsy still counts as a failure, matching the fetch
    /// envelope convention. No retry.
    pub async fn append_row(&self, sheet: &str, values: &[String]) -> Result<Value, Error> {
        let body = AppendRequest { sheet, data: values };
        let response: Value = Fetch::post(&self.client, &self.data_url())
            .timeout(self.options.request_timeout)
            .json(&body)?
            .execute()
            .await?;

        if response.get("success").and_then(Value::as_bool) != Some(true) {
            let message = response
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("Failed to add data")
                .to_string();
            return Err(Error::api(message));
        }

        Ok(response)
    }

    /// Overwrite the row at a 1-based index in the named sheet
    ///
    /// Returns the API's raw JSON response untransformed. No retry.
    pub async fn update_row(
        &self,
        sheet: &str,
        row_index: u32,
        values: &[String],
    ) -> Result<Value, Error> {
        let body = UpdateRequest { sheet, row_index, values };
        Fetch::put(&self.client, &self.data_url())
            .timeout(self.options.request_timeout)
            .json(&body)?
            .execute()
            .await
    }

    /// Delete the row at a 1-based index in the named sheet
    ///
    /// Returns the API's raw JSON response untransformed. No retry.
    pub async fn delete_row(&self, sheet: &str, row_index: u32) -> Result<Value, Error> {
        let mut params = HashMap::new();
        params.insert("sheet".to_string(), sheet.to_string());
        params.insert("rowIndex".to_string(), row_index.to_string());

        Fetch::delete(&self.client, &self.data_url())
            .query(params)
            .timeout(self.options.request_timeout)
            .execute()
            .await
    }
}
