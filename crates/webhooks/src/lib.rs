//! Verification of inbound Linear webhook deliveries.
//!
//! This crate provides:
//! - HMAC-SHA256 digests over the raw request body
//! - Constant-time signature comparison
//! - Freshness checks on the payload's `webhookTimestamp`
//!
//! ```
//! use linear_webhooks::WebhookVerifier;
//!
//! let verifier = WebhookVerifier::new("mysecret");
//! let body = br#"{"action":"create"}"#;
//! let signature = verifier.sign(body);
//!
//! assert!(verifier.verify(body, &signature, None).unwrap());
//! ```

#![warn(missing_docs)]

mod digest;
mod error;
mod payload;
mod timing;
mod verifier;

#[cfg(feature = "wasm")]
mod wasm;

pub use digest::{hmac_sha256, hmac_sha256_hex, DIGEST_LEN};
pub use error::{Result, VerificationError};
pub use payload::{webhook_timestamp, SIGNATURE_HEADER, TIMESTAMP_FIELD};
pub use timing::constant_time_compare;
pub use verifier::{WebhookVerifier, DEFAULT_TOLERANCE};
