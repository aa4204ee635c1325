//! Sign command - compute the signature a sender would attach

use crate::output::Format;
use anyhow::Result;
use linear_webhooks::{WebhookVerifier, SIGNATURE_HEADER};

pub fn run(verifier: &WebhookVerifier, body: &[u8], format: Format) -> Result<()> {
    let signature = verifier.sign(body);
    tracing::debug!(body_len = body.len(), "Signed body");

    match format {
        Format::Text => println!("{}", signature),
        Format::Json => {
            let output = serde_json::json!({
                "header": SIGNATURE_HEADER,
                "signature": signature,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
