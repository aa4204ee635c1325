//! Conventions for where signature and timestamp travel in a delivery.

use serde_json::Value;

/// Request header carrying the hex-encoded signature.
pub const SIGNATURE_HEADER: &str = "linear-signature";

/// Payload field carrying the delivery time in milliseconds since the epoch.
pub const TIMESTAMP_FIELD: &str = "webhookTimestamp";

/// Read the delivery timestamp from an already parsed payload.
///
/// Integers are taken as-is. Floating-point numbers such as `1.7e12` are
/// truncated to whole milliseconds the way a JavaScript sender's number would
/// be checked. Returns `None` when the field is missing, null, not a number,
/// or a falsy float (`0.0`).
pub fn webhook_timestamp(payload: &Value) -> Option<i64> {
    let value = payload.get(TIMESTAMP_FIELD)?;
    match value.as_i64() {
        Some(ts) => Some(ts),
        None => value.as_f64().and_then(millis_from_number),
    }
}

/// Convert a JavaScript-style number to whole milliseconds.
///
/// `0` and `NaN` are falsy and yield `None`, which skips the freshness check.
/// Any other value is truncated toward zero, but never down to `0`, so a
/// fraction such as `0.5` is still checked (and rejected as stale).
/// Infinities saturate to the `i64` bounds.
pub(crate) fn millis_from_number(ts: f64) -> Option<i64> {
    if ts == 0.0 || ts.is_nan() {
        return None;
    }
    let millis = ts.trunc() as i64;
    Some(if millis == 0 { ts.signum() as i64 } else { millis })
}
