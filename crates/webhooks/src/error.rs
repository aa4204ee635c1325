//! Error types for webhook verification.

use thiserror::Error;

/// Result type alias for verification operations.
pub type Result<T> = std::result::Result<T, VerificationError>;

/// Reasons a webhook delivery is rejected.
#[derive(Debug, Error)]
pub enum VerificationError {
    /// The signature is not valid hexadecimal
    #[error("Malformed webhook signature: {0}")]
    MalformedSignature(String),

    /// The signature has the wrong length or does not match the body
    #[error("Invalid webhook signature")]
    InvalidSignature,

    /// The timestamp is outside the freshness window
    #[error("Invalid webhook timestamp: {delta_ms}ms away from current time")]
    StaleTimestamp {
        /// Absolute distance between the timestamp and the verifier's clock
        delta_ms: u64,
    },
}

impl VerificationError {
    /// Stable tag for machine-readable output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedSignature(_) => "malformed_signature",
            Self::InvalidSignature => "invalid_signature",
            Self::StaleTimestamp { .. } => "stale_timestamp",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags() {
        let malformed = VerificationError::MalformedSignature("Odd number of digits".to_string());
        assert_eq!(malformed.kind(), "malformed_signature");
        assert_eq!(VerificationError::InvalidSignature.kind(), "invalid_signature");
        assert_eq!(
            VerificationError::StaleTimestamp { delta_ms: 61_000 }.kind(),
            "stale_timestamp"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            VerificationError::MalformedSignature("Odd number of digits".to_string()).to_string(),
            "Malformed webhook signature: Odd number of digits"
        );
        assert_eq!(
            VerificationError::InvalidSignature.to_string(),
            "Invalid webhook signature"
        );
        assert_eq!(
            VerificationError::StaleTimestamp { delta_ms: 61_000 }.to_string(),
            "Invalid webhook timestamp: 61000ms away from current time"
        );
    }
}
