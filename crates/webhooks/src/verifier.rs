//! Signature and freshness verification for webhook deliveries.
//!
//! A delivery is accepted when all of the following hold:
//! 1. The `linear-signature` value is valid hex
//! 2. It equals the HMAC-SHA256 of the raw body under the shared secret,
//!    compared in constant time
//! 3. If a `webhookTimestamp` was supplied, it lies within the tolerance
//!    window of the verifier's clock
//!
//! The body must be the exact bytes received on the wire. Re-serializing a
//! parsed payload changes the bytes and breaks verification.

use std::fmt;
use std::time::Duration;

use chrono::Utc;

use crate::digest::{hmac_sha256, hmac_sha256_hex};
use crate::timing::constant_time_compare;
use crate::{Result, VerificationError};

/// Freshness window applied when none is configured.
pub const DEFAULT_TOLERANCE: Duration = Duration::from_secs(60);

/// Verifies webhook deliveries signed with a pre-shared secret.
///
/// Construct once and share freely: the verifier holds no mutable state, so
/// concurrent calls need no locking.
#[derive(Clone)]
pub struct WebhookVerifier {
    secret: Vec<u8>,
    tolerance_ms: u64,
}

impl WebhookVerifier {
    /// Create a verifier for the given shared secret.
    ///
    /// The secret is not validated; an empty secret is accepted but offers
    /// no authenticity.
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
            tolerance_ms: duration_to_ms(DEFAULT_TOLERANCE),
        }
    }

    /// Replace the freshness window.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: Duration) -> Self {
        self.tolerance_ms = duration_to_ms(tolerance);
        self
    }

    /// Current freshness window.
    pub fn tolerance(&self) -> Duration {
        Duration::from_millis(self.tolerance_ms)
    }

    /// Hex-encoded signature the sender would attach to `raw_body`.
    pub fn sign(&self, raw_body: &[u8]) -> String {
        hmac_sha256_hex(&self.secret, raw_body)
    }

    /// Verify a delivery against the wall clock.
    ///
    /// # Arguments
    /// * `raw_body` - The exact request body bytes
    /// * `signature` - Hex signature from the `linear-signature` header
    /// * `timestamp` - `webhookTimestamp` from the parsed payload, in ms since the epoch
    ///
    /// # Returns
    /// `Ok(true)` when the delivery is authentic and fresh. Every rejection is
    /// an error, so `Ok(false)` is never returned.
    ///
    /// # Errors
    /// * [`VerificationError::MalformedSignature`] if `signature` is not hex
    /// * [`VerificationError::InvalidSignature`] if it does not match the body
    /// * [`VerificationError::StaleTimestamp`] if `timestamp` is outside the window
    ///
    /// A `timestamp` of `None` or `Some(0)` skips the freshness check.
    pub fn verify(&self, raw_body: &[u8], signature: &str, timestamp: Option<i64>) -> Result<bool> {
        self.check(raw_body, signature, timestamp, || Utc::now().timestamp_millis())
    }

    /// Verify a delivery against a caller-supplied "now" in ms since the epoch.
    pub fn verify_at(
        &self,
        raw_body: &[u8],
        signature: &str,
        timestamp: Option<i64>,
        now_ms: i64,
    ) -> Result<bool> {
        self.check(raw_body, signature, timestamp, || now_ms)
    }

    fn check(
        &self,
        raw_body: &[u8],
        signature: &str,
        timestamp: Option<i64>,
        now_ms: impl FnOnce() -> i64,
    ) -> Result<bool> {
        let provided = hex::decode(signature)
            .map_err(|e| VerificationError::MalformedSignature(e.to_string()))?;
        let expected = hmac_sha256(&self.secret, raw_body);

        if provided.len() != expected.len() || !constant_time_compare(&expected, &provided) {
            return Err(VerificationError::InvalidSignature);
        }

        if let Some(timestamp) = timestamp.filter(|ts| *ts != 0) {
            let delta_ms = now_ms().abs_diff(timestamp);
            if delta_ms > self.tolerance_ms {
                return Err(VerificationError::StaleTimestamp { delta_ms });
            }
        }

        Ok(true)
    }
}

impl fmt::Debug for WebhookVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookVerifier")
            .field("secret", &"[REDACTED]")
            .field("tolerance_ms", &self.tolerance_ms)
            .finish()
    }
}

fn duration_to_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
