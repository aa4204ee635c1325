//! Verify command - check a captured delivery

use crate::output::{Format, Status};
use anyhow::{Context, Result};
use linear_webhooks::{webhook_timestamp, VerificationError, WebhookVerifier, TIMESTAMP_FIELD};
use std::process::ExitCode;

/// Where the freshness timestamp comes from
#[derive(Debug, Clone, Copy)]
pub enum TimestampSource {
    /// Skip the freshness check
    None,
    /// Milliseconds since the epoch given on the command line
    Explicit(i64),
    /// The `webhookTimestamp` field of the JSON body
    Payload,
}

pub fn run(
    verifier: &WebhookVerifier,
    body: &[u8],
    signature: &str,
    source: TimestampSource,
    format: Format,
) -> Result<ExitCode> {
    let timestamp = match source {
        TimestampSource::None => None,
        TimestampSource::Explicit(ts) => Some(ts),
        TimestampSource::Payload => {
            let payload: serde_json::Value =
                serde_json::from_slice(body).context("Body is not valid JSON")?;
            let ts = webhook_timestamp(&payload);
            if ts.is_none() {
                tracing::warn!(
                    field = TIMESTAMP_FIELD,
                    "Payload has no timestamp, skipping freshness check"
                );
            }
            ts
        }
    };

    tracing::debug!(signature, ?timestamp, body_len = body.len(), "Verifying delivery");

    let result = verifier.verify(body, signature, timestamp);
    report(&result, format)?;

    Ok(match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(ref e) => exit_code(e),
    })
}

fn report(result: &linear_webhooks::Result<bool>, format: Format) -> Result<()> {
    match (format, result) {
        (Format::Json, Ok(_)) => {
            println!("{}", serde_json::to_string_pretty(&serde_json::json!({ "valid": true }))?);
        }
        (Format::Json, Err(e)) => {
            let output = serde_json::json!({
                "valid": false,
                "error": e.kind(),
                "message": e.to_string(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        (Format::Text, Ok(_)) => Status::success("Signature valid"),
        (Format::Text, Err(e)) => {
            Status::error(&e.to_string());
            Status::detail("reason", e.kind());
        }
    }
    Ok(())
}

/// Exit code for each rejection reason
pub fn exit_code(error: &VerificationError) -> ExitCode {
    match error {
        VerificationError::InvalidSignature => ExitCode::from(1),
        VerificationError::StaleTimestamp { .. } => ExitCode::from(2),
        VerificationError::MalformedSignature(_) => ExitCode::from(3),
    }
}
