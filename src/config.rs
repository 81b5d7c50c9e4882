//! Configuration options for the petsheets client

use std::time::Duration;

use crate::schema::RowPolicy;

/// Configuration options for the petsheets client
///
/// Built once at startup and handed to every sub-client, so the retry
/// schedule and the row decoding policy can be swapped out in tests.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Total number of fetch attempts before the last error is surfaced
    pub retries: u32,

    /// Base unit of the exponential backoff schedule; attempt `n`
    /// (0-indexed) waits `2^n` times this before the next attempt
    pub backoff_base: Duration,

    /// Per-request timeout; `None` leaves the HTTP client's default
    pub request_timeout: Option<Duration>,

    /// Row decoding policy applied by the content getters
    pub rows: RowPolicy,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            retries: 3,
            backoff_base: Duration::from_secs(1),
            request_timeout: None,
            rows: RowPolicy::default(),
        }
    }
}

impl ClientOptions {
    /// Set the fetch retry budget
    pub fn with_retries(mut self, value: u32) -> Self {
        self.retries = value;
        self
    }

    /// Set the base unit of the backoff schedule
    pub fn with_backoff_base(mut self, value: Duration) -> Self {
        self.backoff_base = value;
        self
    }

    /// Set the per-request timeout
    pub fn with_request_timeout(mut self, value: Option<Duration>) -> Self {
        self.request_timeout = value;
        self
    }

    /// Set the row decoding policy
    pub fn with_row_policy(mut self, value: RowPolicy) -> Self {
        self.rows = value;
        self
    }
}
