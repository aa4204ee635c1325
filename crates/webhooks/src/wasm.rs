//! WASM bindings for webhook verification.

use wasm_bindgen::prelude::*;

use crate::payload::millis_from_number;
use crate::WebhookVerifier;

/// Verifier exposed to JavaScript as `LinearWebhooks`.
#[wasm_bindgen(js_name = LinearWebhooks)]
pub struct WasmWebhookVerifier {
    inner: WebhookVerifier,
}

#[wasm_bindgen(js_class = LinearWebhooks)]
impl WasmWebhookVerifier {
    /// Create a verifier for the given shared secret.
    #[wasm_bindgen(constructor)]
    pub fn new(secret: &str) -> Self {
        Self {
            inner: WebhookVerifier::new(secret),
        }
    }

    /// Verify a delivery.
    ///
    /// # Arguments
    /// * `raw_body` - The exact request body bytes
    /// * `signature` - The `linear-signature` header value
    /// * `timestamp` - The `webhookTimestamp` payload field, if freshness should be checked
    ///
    /// # Returns
    /// true on success; throws with the rejection reason otherwise
    pub fn verify(
        &self,
        raw_body: &[u8],
        signature: &str,
        timestamp: Option<f64>,
    ) -> Result<bool, JsError> {
        let timestamp = timestamp.and_then(millis_from_number);
        self.inner
            .verify(raw_body, signature, timestamp)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Hex signature for a body, as the sender computes it.
    pub fn sign(&self, raw_body: &[u8]) -> String {
        self.inner.sign(raw_body)
    }
}
