//! Payment gateway boundary: order creation and webhook verification
//!
//! The donation flow creates gateway orders in minor currency units and the
//! gateway calls back over a webhook signed with HMAC-SHA256 over the raw
//! request body. Signature verification is a pure function so the webhook
//! handler can stay free of client state.

use hmac::{Hmac, Mac};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::Error;
use crate::fetch::Fetch;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the gateway's webhook signature
pub const SIGNATURE_HEADER: &str = "x-razorpay-signature";

const DEFAULT_GATEWAY_URL: &str = "https://api.razorpay.com";
const CURRENCY: &str = "INR";

#[derive(Debug, Clone, Serialize)]
struct OrderRequest<'a> {
    amount: i64,
    currency: &'a str,
    receipt: String,
}

/// A created payment order
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Order {
    /// Gateway order id
    pub id: String,
    /// Amount in minor currency units
    pub amount: i64,
    /// ISO currency code
    pub currency: String,
}

/// Client for payment gateway order operations
pub struct PaymentsClient {
    base_url: String,
    key_id: String,
    key_secret: String,
    http_client: Client,
}

impl PaymentsClient {
    /// Create a new PaymentsClient
    pub(crate) fn new(key_id: &str, key_secret: &str, http_client: Client) -> Self {
        Self {
            base_url: DEFAULT_GATEWAY_URL.to_string(),
            key_id: key_id.to_string(),
            key_secret: key_secret.to_string(),
            http_client,
        }
    }

    /// Point the client at a different gateway endpoint
    pub fn with_base_url(mut self, value: &str) -> Self {
        self.base_url = value.trim_end_matches('/').to_string();
        self
    }

    /// Create an order for an amount given in major currency units
    ///
    /// The gateway wants minor units, so the amount is multiplied by 100 on
    /// the way out; the returned [`Order`] carries the minor-unit amount.
    pub async fn create_order(&self, amount: i64) -> Result<Order, Error> {
        let body = OrderRequest {
            amount: amount * 100,
            currency: CURRENCY,
            receipt: format!("receipt_{}", now_millis()),
        };

        let url = format!("{}/v1/orders", self.base_url);
        Fetch::post(&self.http_client, &url)
            .basic_auth(&self.key_id, &self.key_secret)
            .json(&body)?
            .execute()
            .await
            .map_err(|error| match error {
                Error::Api(message) => Error::Payment(message),
                other => other,
            })
    }
}

/// Hex-encoded HMAC-SHA256 of a webhook body under the shared secret
pub fn webhook_signature(secret: &str, body: &[u8]) -> String {
    let mut mac = match HmacSha256::new_from_slice(secret.as_bytes()) {
        Ok(mac) => mac,
        // HMAC-SHA256 accepts keys of any length
        Err(_) => return String::new(),
    };
    mac.update(body);
    mac.finalize()
        .into_bytes()
        .iter()
        .map(|byte| format!("{:02x}", byte))
        .collect()
}

/// Check a webhook body against the signature header value
pub fn verify_webhook_signature(secret: &str, body: &[u8], signature: &str) -> bool {
    !signature.is_empty() && webhook_signature(secret, body) == signature
}

fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    // published HMAC-SHA256 test vector
    #[test]
    fn signature_matches_the_known_vector() {
        let signature =
            webhook_signature("key", b"The quick brown fox jumps over the lazy dog");
        assert_eq!(
            signature,
            "f7bc83f430538424b13298e6aa6fb143ef4d59a14946175997479dbc2d1a3cd8"
        );
    }

    #[test]
    fn verification_accepts_the_matching_signature() {
        let body = br#"{"event":"payment.captured","payload":{}}"#;
        let signature = webhook_signature("shared-secret", body);
        assert!(verify_webhook_signature("shared-secret", body, &signature));
    }

    #[test]
    fn verification_rejects_tampered_bodies_and_wrong_secrets() {
        let body = br#"{"event":"payment.captured"}"#;
        let signature = webhook_signature("shared-secret", body);

        assert!(!verify_webhook_signature(
            "shared-secret",
            br#"{"event":"payment.failed"}"#,
            &signature
        ));
        assert!(!verify_webhook_signature("other-secret", body, &signature));
        assert!(!verify_webhook_signature("shared-secret", body, ""));
    }
}
